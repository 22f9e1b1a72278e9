//! Printed views of the game for the line-based commands

use super::formatters::{create_progress_bar, key_cell, tile_cell};
use crate::core::Keyboard;
use crate::game::{GameSession, GameState, Statistics};
use colored::Colorize;

/// Print the board, one row per line
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.rows() {
        let cells: Vec<String> = row.iter().map(|&tile| tile_cell(tile).to_string()).collect();
        println!("   {}", cells.join(" "));
    }
    println!();
}

/// Print the three keyboard rows coloured by verdict
pub fn print_keyboard(keyboard: &Keyboard) {
    for (indent, row) in Keyboard::ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| key_cell(c, keyboard.get(c)).to_string())
            .collect();
        println!("   {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &GameSession) {
    println!("{}", "═".repeat(60).cyan());
    match session.state() {
        GameState::Won => {
            let count = session.guesses().len();
            println!(
                "{}",
                format!(
                    "✅ Solved in {count} {}!",
                    if count == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameState::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                session.target().text().bright_yellow().bold()
            );
        }
        GameState::Playing => {}
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print played/win%/streaks and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.games_played);
    println!(
        "   Win %:           {}",
        stats.win_percentage().to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_bucket());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
    println!();
}

/// Print whether a word would be accepted as a guess
pub fn print_check_result(word: &str, valid: bool) {
    let shown = word.to_uppercase();
    if valid {
        println!("{} {}", "✓".green().bold(), format!("{shown} is a valid guess").green());
    } else {
        println!("{} {}", "✗".red().bold(), format!("{shown} is not in the word list").red());
    }
}
