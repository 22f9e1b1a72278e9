//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess or a command.

use super::share::session_share_text;
use crate::config::Config;
use crate::core::WORD_LENGTH;
use crate::game::{Controller, GuessError, GuessOutcome};
use crate::output::{print_board, print_game_over, print_keyboard};
use crate::persistence::Store;
use std::cmp::Ordering;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Store>(controller: &mut Controller<S>, config: &Config) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║{:^62}║",
        format!("{} #{}", config.game_name, controller.session().day())
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("Type a word and press enter.\n");
    println!("Commands: 'quit' to exit, 'reset' to start over, 'share' for the result grid\n");

    print_board(controller.session());
    if controller.session().state().is_over() {
        print_game_over(controller.session());
    } else {
        print_keyboard(controller.session().keyboard());
    }

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!();
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "reset" => {
                controller.reset(config.puzzle_day());
                println!("\n🔄 Started over on puzzle #{}\n", controller.session().day());
                print_board(controller.session());
            }
            "share" => match session_share_text(controller.session(), &config.game_name) {
                Some(text) => println!("\n{text}\n"),
                None => println!("Finish the puzzle first!\n"),
            },
            _ => match enter_word(controller, &input) {
                Ok(outcome) => {
                    print_board(controller.session());
                    if outcome.state.is_over() {
                        print_game_over(controller.session());
                        if let Some(text) = session_share_text(controller.session(), &config.game_name) {
                            println!("\n{text}\n");
                        }
                        println!("Type 'reset' to play again or 'quit' to exit.\n");
                    } else {
                        print_keyboard(controller.session().keyboard());
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

/// Replace the typed row with `word` and submit it
///
/// Characters other than letters are dropped, as the keyboard would. A line
/// with the wrong number of letters is rejected before anything is typed.
///
/// # Errors
/// - `IncompleteGuess` for fewer than five letters
/// - `UnknownWord` for more than five letters
/// - otherwise the rejection from submitting; the typed letters stay in the row
pub fn enter_word<S: Store>(
    controller: &mut Controller<S>,
    word: &str,
) -> Result<GuessOutcome, GuessError> {
    if controller.session().state().is_over() {
        return Err(GuessError::GameOver);
    }

    let letters: Vec<char> = word.chars().filter(char::is_ascii_alphabetic).collect();
    match letters.len().cmp(&WORD_LENGTH) {
        Ordering::Less => return Err(GuessError::IncompleteGuess),
        Ordering::Greater => return Err(GuessError::UnknownWord),
        Ordering::Equal => {}
    }

    while controller.delete_letter() {}
    for ch in letters {
        controller.type_letter(ch);
    }

    controller.submit()
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
