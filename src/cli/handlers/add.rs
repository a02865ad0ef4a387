//! Add command handler.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::cli::AddArgs;
use crate::domain::{NoteName, Tag};
use crate::infra::EditorLauncher;
use crate::matching::Prompter;
use crate::notebook::{AddOutcome, Notebook};

pub fn handle_add<E: EditorLauncher, P: Prompter>(
    args: &AddArgs,
    notebook: &Notebook<E, P>,
    today: NaiveDate,
) -> Result<()> {
    let name = NoteName::new(&args.name)?;
    let tags = args
        .tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| "invalid tag")?;

    let outcome = notebook.add_note(&name, &tags, !args.no_fuzzy, today)?;
    report_outcome(&name, &outcome);
    Ok(())
}

/// Prints what an add or daily request did.
pub(crate) fn report_outcome(name: &NoteName, outcome: &AddOutcome) {
    match outcome {
        AddOutcome::Created(path) => println!("Created: {}", path.display()),
        AddOutcome::Discarded => eprintln!("No changes made; '{name}' was not saved."),
        AddOutcome::OpenedExisting(existing) => log::info!("opened existing note '{existing}'"),
    }
}
