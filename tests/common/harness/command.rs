//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test files
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `n` binary.
///
/// Inherited `NOTES`, `EDITOR`, `VISUAL`, and `RUST_LOG` are always cleared
/// so the developer's own setup cannot leak into tests.
pub struct NookCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    config_home: Option<PathBuf>,
    stdin: Option<String>,
}

impl NookCommand {
    /// Creates a new command for the `n` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            config_home: None,
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--editor` option.
    pub fn editor(self, editor: impl AsRef<str>) -> Self {
        self.args(["--editor", editor.as_ref()])
    }

    /// Sets the `--search` option.
    pub fn search(self, search: &str) -> Self {
        self.args(["--search", search])
    }

    /// Points `$HOME` and `$XDG_CONFIG_HOME` at `path`.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.envs.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Feeds `input` to the child's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("n").expect("Failed to find n binary");
        for key in ["NOTES", "EDITOR", "VISUAL", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        if let Some(home) = &self.config_home {
            cmd.env("HOME", home).env("XDG_CONFIG_HOME", home);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command.
    pub fn add(self, name: &str) -> Self {
        self.args(["add", name])
    }

    /// Configures for the `open` command.
    pub fn open(self, name: &str) -> Self {
        self.args(["open", name])
    }

    /// Configures for the `daily` command.
    pub fn daily(self) -> Self {
        self.args(["daily"])
    }

    /// Configures for the `list` command.
    pub fn list(self) -> Self {
        self.args(["list"])
    }

    /// Configures for the `delete` command.
    pub fn delete(self, name: &str) -> Self {
        self.args(["delete", name])
    }

    /// Configures for the `grep` command with pass-through arguments.
    pub fn grep(self, args: &[&str]) -> Self {
        self.args(["grep"]).args(args)
    }
}

impl Default for NookCommand {
    fn default() -> Self {
        Self::new()
    }
}
