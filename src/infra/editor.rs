//! Launching the user's editor on a note file.

use std::path::Path;
use std::process::Command;

use crate::error::{NoteError, Result};

/// Opens a file for interactive editing and blocks until the user is done.
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Editor backed by an external command such as `vim` or `code --wait`.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl EditorLauncher for CommandEditor {
    /// Runs `<editor> [editor args...] <path>` and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::ExternalProcess` if the command is empty, cannot
    /// be spawned, or exits with a non-zero status.
    fn open(&self, path: &Path) -> Result<()> {
        let (program, args) = split_command(&self.command)?;

        log::debug!("launching editor: {} {}", self.command, path.display());
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| NoteError::ExternalProcess {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(NoteError::ExternalProcess {
                program: program.to_string(),
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

/// Splits a configured command line into its program and leading arguments.
pub(crate) fn split_command(command: &str) -> Result<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| NoteError::ExternalProcess {
        program: command.to_string(),
        reason: "command is empty".to_string(),
    })?;
    Ok((program, parts.collect()))
}
