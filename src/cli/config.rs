//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::NoteError;
use crate::matching::DEFAULT_THRESHOLD;

/// Editor used when neither flags, environment, nor config name one.
pub const DEFAULT_EDITOR: &str = "vim";

/// Search command used when none is configured.
pub const DEFAULT_SEARCH: &str = "rg";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default notes directory
    pub dir: Option<PathBuf>,

    /// Editor command for editing notes
    pub editor: Option<String>,

    /// Search command for `grep`
    pub search: Option<String>,

    /// Minimum similarity score for duplicate suggestions
    pub fuzzy_threshold: Option<u8>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/nook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nook")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument or `$NOTES`
    /// 2. Config file `dir` setting
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidConfiguration` when neither is set.
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> Result<PathBuf, NoteError> {
        cli_dir.cloned().or_else(|| self.dir.clone()).ok_or_else(|| {
            NoteError::invalid_configuration(
                "no notes directory configured; set NOTES or pass --dir",
            )
        })
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. CLI `--editor` argument or `$EDITOR`
    /// 2. Config file `editor` setting
    /// 3. `$VISUAL` environment variable
    /// 4. "vim" as fallback
    pub fn editor(&self, cli_editor: Option<&str>) -> String {
        cli_editor
            .map(str::to_string)
            .or_else(|| self.editor.clone())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }

    /// Resolve the search command: CLI `--search`, then config, then "rg".
    pub fn search(&self, cli_search: Option<&str>) -> String {
        cli_search
            .map(str::to_string)
            .or_else(|| self.search.clone())
            .unwrap_or_else(|| DEFAULT_SEARCH.to_string())
    }

    /// Resolve the fuzzy threshold: CLI `--threshold`, then config, then 90.
    pub fn fuzzy_threshold(&self, cli_threshold: Option<u8>) -> u8 {
        cli_threshold
            .or(self.fuzzy_threshold)
            .unwrap_or(DEFAULT_THRESHOLD)
    }
}
