//! Isolated test environment with temp directory.

use super::NookCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// The notes directory, the config home, and any fake editor scripts all
/// live under one temp directory that is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    config_home: PathBuf,
    bin_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let config_home = temp_dir.path().join("config");
        let bin_dir = temp_dir.path().join("bin");
        for dir in [&notes_dir, &config_home, &bin_dir] {
            fs::create_dir(dir).expect("Failed to create test directory");
        }
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            config_home,
            bin_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the directory used as `$HOME` / `$XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Writes a note file with raw contents and returns its path.
    pub fn add_note(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.note_path(name);
        fs::write(&path, contents).expect("Failed to write test note");
        path
    }

    /// Path of the file backing note `name`.
    pub fn note_path(&self, name: &str) -> PathBuf {
        self.notes_dir.join(format!("{name}.md"))
    }

    /// Reads a note's contents, or None if it does not exist.
    pub fn read_note(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.note_path(name)).ok()
    }

    /// Sorted file names in the notes directory.
    pub fn files(&self) -> Vec<String> {
        let mut files: Vec<String> = fs::read_dir(&self.notes_dir)
            .expect("Failed to read notes directory")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        files.sort();
        files
    }

    /// Writes an executable editor script that appends `text` to the note.
    #[cfg(unix)]
    pub fn appending_editor(&self, text: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join("append-editor");
        let script = format!("#!/bin/sh\nprintf '%s\\n' '{text}' >> \"$1\"\n");
        fs::write(&path, script).expect("Failed to write editor script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make editor executable");
        path
    }

    /// Creates a NookCommand configured for this test environment.
    pub fn cmd(&self) -> NookCommand {
        NookCommand::new()
            .config_home(&self.config_home)
            .dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
