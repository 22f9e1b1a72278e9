//! Share command: print or copy the result grid

use crate::game::{Controller, GameSession, GameState};
use crate::persistence::Store;
use crate::share::{ShareError, copy_to_clipboard, share_text};
use colored::Colorize;

/// Share text for a finished session, `None` while still playing
#[must_use]
pub fn session_share_text(session: &GameSession, game_name: &str) -> Option<String> {
    session.state().is_over().then(|| {
        share_text(
            game_name,
            session.day(),
            session.guesses(),
            session.target(),
            session.state() == GameState::Won,
        )
    })
}

/// Print the share text, or copy it when `copy` is set
///
/// Falls back to printing when no clipboard is available.
pub fn run_share<S: Store>(controller: &Controller<S>, game_name: &str, copy: bool) {
    let Some(text) = session_share_text(controller.session(), game_name) else {
        println!(
            "{}",
            format!(
                "Puzzle #{} is still in progress; finish it to share.",
                controller.session().day()
            )
            .yellow()
        );
        return;
    };

    if copy {
        match copy_to_clipboard(&text) {
            Ok(()) => {
                println!("{}", "✓ Copied results to clipboard".green().bold());
                return;
            }
            Err(e @ ShareError::ClipboardUnavailable) => {
                println!("{}", e.to_string().yellow());
            }
        }
    }

    println!("{text}");
}
