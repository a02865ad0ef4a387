//! Note identifier derived from a note's filename stem.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{NoteError, Result};

/// File extension shared by every note file.
pub const NOTE_EXTENSION: &str = "md";

/// The name of a note, unique within a notes directory.
///
/// A name maps 1:1 to a file `<name>.md` directly inside the root.
/// Names are case-sensitive and case-preserving: `Standup` and `standup`
/// are different notes. Ordering is byte-lexicographic, which is the order
/// used by `list` and by fuzzy matching.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - Must not start with `.` (hidden files are never notes)
/// - Must not contain path separators, NUL, or other control characters
///
/// # Examples
///
/// ```
/// use nook::domain::NoteName;
///
/// let name = NoteName::new("  Meeting Minutes ").unwrap();
/// assert_eq!(name.as_str(), "Meeting Minutes");
/// assert_eq!(name.file_name(), "Meeting Minutes.md");
///
/// assert!(NoteName::new("../escape").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteName(String);

impl NoteName {
    /// Creates a new NoteName, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidName` if the name is empty, hidden,
    /// or contains characters that cannot appear in a single filename.
    pub fn new(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = |reason: &str| NoteError::InvalidName {
            name: s.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if trimmed.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(invalid("name cannot contain path separators"));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Name of the daily note for `date`, e.g. `2023-02-12`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the file name backing this note.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, NOTE_EXTENSION)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteName(\"{}\")", self.0)
    }
}

impl FromStr for NoteName {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for NoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NoteName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
