//! List command handler.

use anyhow::Result;

use crate::cli::ListArgs;
use crate::cli::output::{Listing, OutputFormat};
use crate::domain::NoteName;
use crate::infra::{EditorLauncher, NoteStore};
use crate::matching::Prompter;
use crate::notebook::Notebook;

pub fn handle_list<E: EditorLauncher, P: Prompter>(
    args: &ListArgs,
    notebook: &Notebook<E, P>,
) -> Result<()> {
    let names = notebook.list_notes()?;
    print!("{}", render_listing(&names, notebook.store(), args.format)?);
    Ok(())
}

/// Formats note names for output. Human and path output end each entry
/// with a newline, so an empty store renders as an empty string.
pub(crate) fn render_listing(
    names: &[NoteName],
    store: &NoteStore,
    format: OutputFormat,
) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            for name in names {
                out.push_str(name.as_str());
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&Listing::new(names, store))?;
            out.push('\n');
        }
        OutputFormat::Paths => {
            for name in names {
                out.push_str(&store.path_for(name).to_string_lossy());
                out.push('\n');
            }
        }
    }
    Ok(out)
}
