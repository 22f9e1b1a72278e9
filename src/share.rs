//! Share text and clipboard copy
//!
//! The share block is a header line, a blank line and one marker row per
//! guess, with no trailing whitespace.

use crate::core::{Feedback, MAX_GUESSES, PuzzleDay, Word};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("no clipboard available; copy the text manually")]
    ClipboardUnavailable,
}

/// Clipboard helpers tried in order, with their arguments
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Render the share block for a finished (or abandoned) game
///
/// The header shows the guess count for a win and `X` otherwise.
///
/// # Examples
/// ```
/// use wordly::core::{PuzzleDay, Word};
/// use wordly::share::share_text;
///
/// let target = Word::new("alloy").unwrap();
/// let guesses = [Word::new("llama").unwrap(), Word::new("alloy").unwrap()];
/// let text = share_text("Wordly", PuzzleDay::new(12), &guesses, &target, true);
///
/// assert_eq!(text, "Wordly 12 2/6\n\n🟨🟩🟨⬛⬛\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(
    game_name: &str,
    puzzle: PuzzleDay,
    guesses: &[Word],
    target: &Word,
    won: bool,
) -> String {
    let count = if won {
        guesses.len().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("{game_name} {puzzle} {count}/{MAX_GUESSES}\n\n");
    for guess in guesses {
        text.push_str(&Feedback::classify(guess, target).to_emoji());
        text.push('\n');
    }

    text.trim_end().to_string()
}

/// Copy text to the system clipboard
///
/// # Errors
/// `ClipboardUnavailable` when no clipboard helper accepted the text; the
/// caller should show the text instead.
pub fn copy_to_clipboard(text: &str) -> Result<(), ShareError> {
    for &(program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text) {
            Ok(()) => {
                tracing::debug!(program, "Copied share text");
                return Ok(());
            }
            Err(e) => tracing::trace!(program, "Clipboard helper failed: {e}"),
        }
    }

    tracing::info!("No clipboard helper available");
    Err(ShareError::ClipboardUnavailable)
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Err(io::Error::other("stdin not captured")),
    };
    let status = child.wait()?;
    written?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn won_game_grid() {
        let target = Word::new("crane").unwrap();
        let text = share_text(
            "Wordly",
            PuzzleDay::new(1234),
            &words(&["slate", "crane"]),
            &target,
            true,
        );

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["Wordly 1234 2/6", "", "⬛⬛🟩⬛🟩", "🟩🟩🟩🟩🟩"]);
    }

    #[test]
    fn lost_game_shows_x() {
        let target = Word::new("crane").unwrap();
        let guesses = words(&["slate", "audio", "month", "build", "fight", "proxy"]);
        let text = share_text("Wordly", PuzzleDay::new(5), &guesses, &target, false);

        assert!(text.starts_with("Wordly 5 X/6\n\n"));
        assert_eq!(text.lines().count(), 2 + 6);
        assert!(!text.ends_with('\n'));
        for line in text.lines().skip(2) {
            assert_eq!(line.chars().count(), 5);
        }
    }

    #[test]
    fn duplicate_letters_use_consuming_classifier() {
        // SPEED vs ABIDE: the second E must not be yellow
        let text = share_text(
            "W",
            PuzzleDay::new(0),
            &words(&["speed"]),
            &Word::new("abide").unwrap(),
            false,
        );
        assert_eq!(text.lines().last(), Some("⬛⬛🟨⬛🟨"));
    }

    #[test]
    fn no_guesses_is_header_only() {
        let text = share_text("Wordly", PuzzleDay::new(9), &[], &Word::new("crane").unwrap(), false);
        assert_eq!(text, "Wordly 9 X/6");
    }
}
