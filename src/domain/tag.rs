//! Free-form tag attached to a note header.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{NoteError, Result};

/// An opaque label written into a note's header.
///
/// Tags keep their case and their order; duplicates are allowed. Since the
/// header stores tags as a single comma-joined line, a tag may not contain
/// a comma or a line break.
///
/// # Examples
///
/// ```
/// use nook::domain::Tag;
///
/// let tag = Tag::new(" meeting_minutes ").unwrap();
/// assert_eq!(tag.as_str(), "meeting_minutes");
///
/// assert!(Tag::new("a,b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Creates a new Tag, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidTag` if the tag is empty or contains
    /// a comma or control character.
    pub fn new(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = |reason: &str| NoteError::InvalidTag {
            tag: s.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("tag cannot be empty"));
        }
        if trimmed.contains(',') {
            return Err(invalid("tag cannot contain ','"));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(invalid("tag cannot contain control characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
