//! Asking the user whether a new note duplicates an existing one.

use std::io::{self, BufRead, Write};

use crate::error::{NoteError, Result};

/// Outcome of the duplicate check for a requested note name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Create a new note under the name the user typed.
    CreateNew,
    /// Open this existing note instead.
    Existing(String),
}

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Shows `prompt` and returns the raw line the user entered.
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Prompter that writes to stderr and reads a line from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str) -> Result<String> {
        let stdin_error = |e: io::Error| NoteError::ExternalProcess {
            program: "terminal".to_string(),
            reason: e.to_string(),
        };

        let mut stderr = io::stderr().lock();
        stderr
            .write_all(prompt.as_bytes())
            .and_then(|()| stderr.flush())
            .map_err(stdin_error)?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).map_err(stdin_error)?;
        Ok(line)
    }
}

/// Renders the numbered list of choices.
///
/// Option 1 is always the user's own input; the candidates follow in the
/// order given.
pub fn render_choices<S: AsRef<str>>(input: &str, candidates: &[S]) -> String {
    let mut text = format!("  1) {input} (USER INPUT)\n");
    for (i, candidate) in candidates.iter().enumerate() {
        text.push_str(&format!("  {}) {}\n", i + 2, candidate.as_ref()));
    }
    text
}

/// Maps a raw answer onto a selection.
///
/// # Errors
///
/// Returns `NoteError::InvalidSelection` if the answer is not an integer
/// in `1..=candidates.len() + 1`.
pub fn parse_selection<S: AsRef<str>>(answer: &str, candidates: &[S]) -> Result<Selection> {
    let max = candidates.len() + 1;
    let invalid = || NoteError::InvalidSelection {
        input: answer.trim().to_string(),
        max,
    };

    let choice: usize = answer.trim().parse().map_err(|_| invalid())?;
    match choice {
        1 => Ok(Selection::CreateNew),
        n if (2..=max).contains(&n) => Ok(Selection::Existing(
            candidates[n - 2].as_ref().to_string(),
        )),
        _ => Err(invalid()),
    }
}

/// Shows the choices, asks once, and returns the user's selection.
///
/// An invalid answer aborts rather than re-prompting.
pub fn disambiguate<P, S>(prompter: &P, input: &str, candidates: &[S]) -> Result<Selection>
where
    P: Prompter + ?Sized,
    S: AsRef<str>,
{
    let prompt = format!(
        "{}Similar notes exist. Select a note [1-{}]: ",
        render_choices(input, candidates),
        candidates.len() + 1
    );
    let answer = prompter.ask(&prompt)?;
    parse_selection(&answer, candidates)
}
