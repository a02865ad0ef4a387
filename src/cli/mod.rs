//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// n - create, open, and search markdown notes in a single directory
///
/// Options go before the subcommand so that `grep` can forward every
/// argument after it to the search command.
#[derive(Parser, Debug)]
#[command(name = "n", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, env = "NOTES")]
    pub dir: Option<PathBuf>,

    /// Editor command used to open notes
    #[arg(long, env = "EDITOR")]
    pub editor: Option<String>,

    /// Search command used by `grep` (default: rg)
    #[arg(long)]
    pub search: Option<String>,

    /// Minimum similarity (0-100) for a name to count as a possible duplicate
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note, checking for similarly named notes first
    Add(AddArgs),

    /// Open an existing note in your editor
    Open(OpenArgs),

    /// Open today's note, creating it if needed
    Daily,

    /// Full-text search across notes with the search command
    Grep(GrepArgs),

    /// List all notes
    List(ListArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note name (file name without .md)
    pub name: String,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Skip the similar-name check
    #[arg(long)]
    pub no_fuzzy: bool,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Note name
    pub name: String,
}

/// Arguments for the `grep` command
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct GrepArgs {
    /// Arguments passed unchanged to the search command
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note name
    pub name: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
