//! Formatting utilities for terminal output

use crate::core::{KeyVerdict, TileVerdict};
use crate::game::Tile;
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One board tile as a padded, coloured cell
#[must_use]
pub fn tile_cell(tile: Tile) -> ColoredString {
    let letter = tile.letter.unwrap_or('·');
    let cell = format!(" {letter} ");
    match tile.verdict {
        TileVerdict::Correct => cell.black().on_green().bold(),
        TileVerdict::Present => cell.black().on_yellow().bold(),
        TileVerdict::Absent => cell.white().on_bright_black(),
        TileVerdict::Filled => cell.bright_white().bold(),
        TileVerdict::Empty => cell.bright_black(),
    }
}

/// A keyboard letter coloured by its best verdict so far
#[must_use]
pub fn key_cell(letter: char, verdict: KeyVerdict) -> ColoredString {
    let key = letter.to_string();
    match verdict {
        KeyVerdict::Correct => key.green().bold(),
        KeyVerdict::Present => key.yellow().bold(),
        KeyVerdict::Absent => key.bright_black(),
        KeyVerdict::Unused => key.normal(),
    }
}
