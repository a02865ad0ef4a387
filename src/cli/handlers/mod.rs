//! Command handlers for the CLI.

mod add;
mod delete;
mod grep;
mod list;
mod open;


use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

use super::{Cli, CompletionsArgs};

// Re-export public items
pub use add::handle_add;
pub use delete::handle_delete;
pub use grep::handle_grep;
pub use list::handle_list;
pub use open::{handle_daily, handle_open};

// Re-export for tests
#[cfg(test)]
pub(crate) use grep::exit_code_for;
#[cfg(test)]
pub(crate) use list::render_listing;

/// Writes a completion script for the requested shell to stdout.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    generate(args.shell, &mut command, bin_name, &mut io::stdout());
    Ok(())
}
