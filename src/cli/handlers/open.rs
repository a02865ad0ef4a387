//! Open and Daily command handlers.

use anyhow::Result;
use chrono::NaiveDate;

use super::add::report_outcome;
use crate::cli::OpenArgs;
use crate::domain::NoteName;
use crate::infra::EditorLauncher;
use crate::matching::Prompter;
use crate::notebook::Notebook;

pub fn handle_open<E: EditorLauncher, P: Prompter>(
    args: &OpenArgs,
    notebook: &Notebook<E, P>,
) -> Result<()> {
    let name = NoteName::new(&args.name)?;
    notebook.open_note(&name)?;
    Ok(())
}

pub fn handle_daily<E: EditorLauncher, P: Prompter>(
    notebook: &Notebook<E, P>,
    today: NaiveDate,
) -> Result<()> {
    let outcome = notebook.open_daily_note(today)?;
    report_outcome(&NoteName::for_date(today), &outcome);
    Ok(())
}
