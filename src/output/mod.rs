//! Terminal output formatting
//!
//! Coloured printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_keyboard, print_statistics,
};
