//! Flat directory of `<name>.md` note files.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::domain::{NOTE_EXTENSION, NoteName};
use crate::error::{NoteError, Result};

/// Notes stored as files directly inside a root directory.
///
/// Subdirectories are never scanned. The set of notes is recomputed on
/// every call; nothing is cached between operations.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Opens a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidConfiguration` if `root` does not exist
    /// or is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(NoteError::invalid_configuration(format!(
                "'{}' is an invalid value for NOTES; please use an existing directory.",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists note names in ascending order.
    ///
    /// Hidden files and files whose stem is not a valid note name are skipped.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Io` if the root cannot be read.
    pub fn list_identifiers(&self) -> Result<Vec<NoteName>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| NoteError::io(&self.root, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|e| e != NOTE_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("skipping non UTF-8 file name: {}", path.display());
                continue;
            };
            match NoteName::new(stem) {
                // Stems with surrounding whitespace would not round-trip to this file.
                Ok(name) if name.as_str() == stem => names.push(name),
                _ => log::debug!("skipping {}", path.display()),
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn exists(&self, name: &NoteName) -> bool {
        self.path_for(name).is_file()
    }

    /// Returns the file path backing `name` without touching the filesystem.
    pub fn path_for(&self, name: &NoteName) -> PathBuf {
        self.root.join(name.file_name())
    }

    /// Creates a new note with `contents`, failing if it already exists.
    ///
    /// The content is written to a temporary file in the root and then
    /// linked into place without clobbering, so two concurrent creators
    /// cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::AlreadyExists` if the note file already exists.
    pub fn create(&self, name: &NoteName, contents: &str) -> Result<PathBuf> {
        let path = self.path_for(name);

        let mut temp = NamedTempFile::new_in(&self.root).map_err(|e| NoteError::io(&path, e))?;
        temp.write_all(contents.as_bytes())
            .map_err(|e| NoteError::io(&path, e))?;

        temp.persist_noclobber(&path).map_err(|e| match e.error.kind() {
            io::ErrorKind::AlreadyExists => NoteError::AlreadyExists {
                name: name.to_string(),
            },
            _ => NoteError::io(&path, e.error),
        })?;

        Ok(path)
    }

    /// Reads the full contents of a note.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if the note does not exist.
    pub fn read(&self, name: &NoteName) -> Result<String> {
        let path = self.path_for(name);
        std::fs::read_to_string(&path).map_err(|e| self.map_missing(name, &path, e))
    }

    /// Removes the file backing `name`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if the note does not exist.
    pub fn delete(&self, name: &NoteName) -> Result<()> {
        let path = self.path_for(name);
        std::fs::remove_file(&path).map_err(|e| self.map_missing(name, &path, e))
    }

    fn map_missing(&self, name: &NoteName, path: &Path, error: io::Error) -> NoteError {
        match error.kind() {
            io::ErrorKind::NotFound => NoteError::NotFound {
                name: name.to_string(),
            },
            _ => NoteError::io(path, error),
        }
    }
}
