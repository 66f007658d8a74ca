//! Word Game - CLI
//!
//! Guess the hidden word in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{evaluate_guess, load_stats_report, run_simple},
    controller::Controller,
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{print_evaluation, print_stats},
    services::{
        DefinitionFile, DefinitionLookup, GameStore, JsonStore, MemoryStore, NoDefinitions, Storage,
    },
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with letter-by-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 4 to 7
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    letters: usize,

    /// Number of attempts: 1 to 10
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Wordlist: 'all' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Directory for saved stats and games
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep stats and games in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Discard the saved game before starting
    #[arg(long, global = true)]
    reset: bool,

    /// Tab-separated `word<TAB>definition` file shown at the end of a game
    #[arg(long, global = true)]
    definitions: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },

    /// Show saved statistics
    Stats,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "all" => Ok(Dictionary::embedded()),
        path => Dictionary::load(path).with_context(|| format!("failed to load wordlist {path}")),
    }
}

fn load_definitions(path: Option<&PathBuf>) -> Result<Box<dyn DefinitionLookup>> {
    match path {
        Some(path) => {
            let definitions = DefinitionFile::load(path)
                .with_context(|| format!("failed to load definitions {}", path.display()))?;
            debug!(count = definitions.len(), "loaded definitions");
            Ok(Box::new(definitions))
        }
        None => Ok(Box::new(NoDefinitions)),
    }
}

fn open_store(cli: &Cli) -> Box<dyn Storage> {
    if cli.no_save {
        return Box::new(MemoryStore::default());
    }
    let dir = cli.data_dir.clone().unwrap_or_else(JsonStore::default_dir);
    debug!(dir = %dir.display(), "using data directory");
    Box::new(JsonStore::new(dir))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Evaluate { guess, target } => {
            let result = evaluate_guess(&guess, &target)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Stats => {
            let store = open_store(&cli);
            let report = load_stats_report(store.as_ref())?;
            print_stats(&report);
            Ok(())
        }
        Commands::Play => run_game(&cli, true),
        Commands::Simple => run_game(&cli, false),
    }
}

fn run_game(cli: &Cli, tui: bool) -> Result<()> {
    let config = GameConfig::new(cli.letters, cli.attempts)?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    let definitions = load_definitions(cli.definitions.as_ref())?;

    let mut store = open_store(cli);
    if cli.reset {
        store.clear_game()?;
    }

    let mut controller = Controller::new(config, &dictionary, definitions.as_ref(), store)?;

    if tui {
        use wordle_game::interactive::{App, run_tui};
        run_tui(App::new(controller))
    } else {
        run_simple(&mut controller)
    }
}
