//! Core domain types for the game
//!
//! Words, verdicts, feedback classification, keyboard aggregation and puzzle
//! numbering. Everything here is pure: no I/O, no clock reads except
//! `PuzzleDay::today`.

mod feedback;
mod keyboard;
mod puzzle;
mod verdict;
mod word;

pub use feedback::Feedback;
pub use keyboard::Keyboard;
pub use puzzle::PuzzleDay;
pub use verdict::{KeyVerdict, TileVerdict};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per puzzle
pub const MAX_GUESSES: usize = 6;
