//! Wordly - CLI
//!
//! Daily five-letter word game with TUI and line-based modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordly::{
    commands::{run_check, run_share, run_simple, run_stats},
    config::{Config, DEFAULT_GAME_NAME},
    game::Controller,
    persistence::{FileStore, MemoryStore, Persistence, Store},
};

#[derive(Parser)]
#[command(
    name = "wordly",
    about = "Daily five-letter word game with saved progress and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved games and logs
    #[arg(long, global = true, env = "WORDLY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Extra guessable words, one per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Play the puzzle for this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Game name used in share text
    #[arg(long, global = true, default_value = DEFAULT_GAME_NAME)]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show saved statistics
    Stats,

    /// Print the result grid for today's finished puzzle
    Share {
        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// Check whether a word is accepted as a guess
    Check {
        /// Word to look up
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        data_dir: cli.data_dir.unwrap_or_else(Config::default_data_dir),
        words_path: cli.words,
        game_name: cli.name,
        date: cli.date,
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&config.logs_dir());
    tracing::info!(data_dir = %config.data_dir.display(), "Starting wordly");

    let words = config
        .word_source()
        .context("Failed to read the extra words file")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let persistence = Persistence::new(open_store(&config.data_dir));

    match command {
        Commands::Play => {
            use wordly::interactive::{App, run_tui};

            let controller = Controller::start(words, persistence, config.puzzle_day());
            run_tui(App::new(controller, config))
        }
        Commands::Simple => {
            let mut controller = Controller::start(words, persistence, config.puzzle_day());
            run_simple(&mut controller, &config)?;
            Ok(())
        }
        Commands::Stats => {
            run_stats(&persistence);
            Ok(())
        }
        Commands::Share { copy } => {
            let controller = Controller::start(words, persistence, config.puzzle_day());
            run_share(&controller, &config.game_name, copy);
            Ok(())
        }
        Commands::Check { word } => {
            run_check(&words, &word);
            Ok(())
        }
    }
}

/// File logging under the data directory; the terminal is left to the game
///
/// Returns `None` (logging off) if the log file cannot be opened.
fn init_logging(logs_dir: &Path) -> Option<WorkerGuard> {
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("wordly.log")
        .build(logs_dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Some(guard)
}

/// File store in the data directory, or memory if it is unusable
fn open_store(data_dir: &Path) -> Box<dyn Store> {
    match FileStore::new(data_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Progress will not be saved: {e}");
            Box::new(MemoryStore::new())
        }
    }
}
