//! Wordly
//!
//! A daily five-letter word guessing game: one shared puzzle per calendar
//! day, six guesses, tile and keyboard feedback, and statistics that carry
//! across days.
//!
//! # Quick Start
//!
//! ```rust
//! use wordly::core::{Feedback, TileVerdict, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("abide").unwrap();
//!
//! let feedback = Feedback::classify(&guess, &answer);
//! assert_eq!(feedback.to_emoji(), "⬛⬛🟨⬛🟨");
//! assert_eq!(feedback.count(TileVerdict::Present), 2);
//! ```

// Core domain types
pub mod core;

// Word lists and the daily answer
pub mod wordlists;

// Game state machine, statistics and dispatcher
pub mod game;

// Saved sessions and statistics
pub mod persistence;

// Share text and clipboard
pub mod share;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
