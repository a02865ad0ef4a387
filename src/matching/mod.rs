//! Duplicate detection for new notes: fuzzy scoring and the follow-up prompt.

mod fuzzy;
mod prompt;

pub use fuzzy::{DEFAULT_LIMIT, DEFAULT_THRESHOLD, FuzzyMatcher, MatchCandidate, score};
pub use prompt::{
    Prompter, Selection, TerminalPrompter, disambiguate, parse_selection, render_choices,
};
