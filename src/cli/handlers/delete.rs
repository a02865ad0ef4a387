//! Delete command handler.

use anyhow::Result;

use crate::cli::DeleteArgs;
use crate::domain::NoteName;
use crate::infra::EditorLauncher;
use crate::matching::Prompter;
use crate::notebook::Notebook;

pub fn handle_delete<E: EditorLauncher, P: Prompter>(
    args: &DeleteArgs,
    notebook: &Notebook<E, P>,
) -> Result<()> {
    let name = NoteName::new(&args.name)?;
    notebook.delete_note(&name)?;
    println!("Deleted: {name}");
    Ok(())
}
