//! nook - flat-file markdown notes with duplicate-aware creation

pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod matching;
pub mod notebook;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_daily, handle_delete, handle_grep, handle_list,
        handle_open,
    },
};
use infra::{CommandEditor, NoteStore, SearchTool};
use matching::{FuzzyMatcher, TerminalPrompter};
use notebook::Notebook;

/// Main entry point for the CLI application.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let today = Local::now().date_naive();

    match &cli.command {
        Command::Add(args) => handle_add(args, &Session::open(&cli)?.notebook, today)?,
        Command::Open(args) => handle_open(args, &Session::open(&cli)?.notebook)?,
        Command::Daily => handle_daily(&Session::open(&cli)?.notebook, today)?,
        Command::Grep(args) => {
            let session = Session::open(&cli)?;
            return handle_grep(args, session.notebook.store(), &session.search);
        }
        Command::List(args) => handle_list(args, &Session::open(&cli)?.notebook)?,
        Command::Delete(args) => handle_delete(args, &Session::open(&cli)?.notebook)?,
        Command::Completions(args) => handle_completions(args)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Everything a note command needs, resolved from flags, env, and config.
struct Session {
    notebook: Notebook<CommandEditor, TerminalPrompter>,
    search: SearchTool,
}

impl Session {
    /// Loads configuration and validates the notes root.
    fn open(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;
        let store = NoteStore::open(config.notes_dir(cli.dir.as_ref())?)?;
        let editor = CommandEditor::new(config.editor(cli.editor.as_deref()));
        let matcher = FuzzyMatcher::new(config.fuzzy_threshold(cli.threshold))?;
        log::debug!(
            "notes root: {}, editor: {}, threshold: {}",
            store.root().display(),
            editor.command(),
            matcher.threshold()
        );

        Ok(Self {
            notebook: Notebook::new(store, editor, TerminalPrompter, matcher),
            search: SearchTool::new(config.search(cli.search.as_deref())),
        })
    }
}

/// Sends `log` output to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
