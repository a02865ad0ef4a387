//! Error taxonomy shared by every note operation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while resolving, creating, or opening notes.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("'{name}' already exists.")]
    AlreadyExists { name: String },

    #[error("'{name}' does not exist.")]
    NotFound { name: String },

    #[error("{message}")]
    InvalidConfiguration { message: String },

    #[error("invalid selection '{input}': expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("invalid note name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("failed to run '{program}': {reason}")]
    ExternalProcess { program: String, reason: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NoteError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        NoteError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        NoteError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type Result<T, E = NoteError> = std::result::Result<T, E>;
