//! Full-text search by handing off to an external tool such as `rg`.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::editor::split_command;
use crate::error::{NoteError, Result};

/// External search command run against the notes root.
#[derive(Debug, Clone)]
pub struct SearchTool {
    command: String,
}

impl SearchTool {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Builds the argv: `<search> <args...> <root>`.
    ///
    /// User arguments are passed through untouched; no shell is involved.
    pub fn argv(&self, args: &[String], root: &Path) -> Result<(String, Vec<OsString>)> {
        let (program, leading) = split_command(&self.command)?;
        let argv = leading
            .into_iter()
            .map(OsString::from)
            .chain(args.iter().map(OsString::from))
            .chain(std::iter::once(root.as_os_str().to_os_string()))
            .collect();
        Ok((program.to_string(), argv))
    }

    /// Runs the search and returns its exit status.
    ///
    /// A non-zero status is not an error here: `rg` exits with 1 when
    /// nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::ExternalProcess` if the tool cannot be spawned.
    pub fn run(&self, args: &[String], root: &Path) -> Result<ExitStatus> {
        let (program, argv) = self.argv(args, root)?;
        log::debug!("running search: {program} {argv:?}");

        Command::new(&program)
            .args(&argv)
            .status()
            .map_err(|e| NoteError::ExternalProcess {
                program,
                reason: e.to_string(),
            })
    }
}
