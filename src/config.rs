//! Runtime configuration
//!
//! Built by the binary from command-line flags and environment; the library
//! only reads it.

use crate::core::PuzzleDay;
use crate::wordlists::WordSource;
use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};

/// Name printed in share headers unless overridden
pub const DEFAULT_GAME_NAME: &str = "Wordly";

/// Fallback when the platform has no data directory
const FALLBACK_DATA_DIR: &str = "./save_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the session and statistics records live
    pub data_dir: PathBuf,
    /// Extra guessable words, one per line
    pub words_path: Option<PathBuf>,
    /// Name used in share text
    pub game_name: String,
    /// Play this date's puzzle instead of today's
    pub date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            words_path: None,
            game_name: DEFAULT_GAME_NAME.to_string(),
            date: None,
        }
    }
}

impl Config {
    /// Platform data directory for the game, or `./save_data`
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "wordly").map_or_else(
            || PathBuf::from(FALLBACK_DATA_DIR),
            |dirs| dirs.data_dir().to_path_buf(),
        )
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Puzzle to play: the `date` override, else today's
    ///
    /// Reads the clock when no override is set, so call it at start-up or on
    /// an explicit reset only.
    #[must_use]
    pub fn puzzle_day(&self) -> PuzzleDay {
        self.date.map_or_else(PuzzleDay::today, PuzzleDay::from_date)
    }

    /// Embedded word lists plus the optional extra words file
    ///
    /// # Errors
    /// Returns an error if `words_path` is set and cannot be read.
    pub fn word_source(&self) -> io::Result<WordSource> {
        let words = WordSource::embedded();
        match &self.words_path {
            Some(path) => words.with_extra_words(path),
            None => Ok(words),
        }
    }
}
