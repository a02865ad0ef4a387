//! Grep command handler.

use anyhow::Result;
use std::process::ExitCode;

use crate::cli::GrepArgs;
use crate::infra::{NoteStore, SearchTool};

/// Runs the search tool over the notes root and mirrors its exit code.
pub fn handle_grep(args: &GrepArgs, store: &NoteStore, search: &SearchTool) -> Result<ExitCode> {
    let status = search.run(&args.args, store.root())?;
    Ok(ExitCode::from(exit_code_for(status.code())))
}

/// Exit code for a child that exited with `code` (None if killed by a signal).
pub(crate) fn exit_code_for(code: Option<i32>) -> u8 {
    match code.map(u8::try_from) {
        Some(Ok(code)) => code,
        _ => 1,
    }
}
