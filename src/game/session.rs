//! The game state machine
//!
//! A `GameSession` is one puzzle day in progress: the target, submitted
//! guesses, the letters being typed, keyboard state and the statistics that
//! carry over between days. It performs no I/O; callers persist it after each
//! mutation.

use super::input::Key;
use super::stats::{Outcome, Statistics};
use crate::core::{Feedback, Keyboard, MAX_GUESSES, PuzzleDay, TileVerdict, WORD_LENGTH, Word};
use crate::wordlists::WordSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Terminal outcome, `None` while playing
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Playing => None,
            Self::Won => Some(Outcome::Won),
            Self::Lost => Some(Outcome::Lost),
        }
    }
}

/// Why a guess was not accepted; all are recoverable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list")]
    UnknownWord,
    #[error("The game is over")]
    GameOver,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: Word,
    pub feedback: Feedback,
    pub state: GameState,
    /// Zero-based row the guess landed in
    pub row: usize,
}

/// One board cell as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: TileVerdict,
}

/// One puzzle day in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    day: PuzzleDay,
    target_word: Word,
    guesses: Vec<Word>,
    current_guess: String,
    current_row: usize,
    game_state: GameState,
    keyboard_state: Keyboard,
    /// Persisted as its own record
    #[serde(skip)]
    stats: Statistics,
}

impl GameSession {
    /// Fresh session with zeroed statistics
    #[must_use]
    pub fn new(day: PuzzleDay, target: Word) -> Self {
        Self {
            day,
            target_word: target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            current_guess: String::with_capacity(WORD_LENGTH),
            current_row: 0,
            game_state: GameState::Playing,
            keyboard_state: Keyboard::new(),
            stats: Statistics::default(),
        }
    }

    /// Replace the carried-over statistics
    #[must_use]
    pub fn with_statistics(mut self, stats: Statistics) -> Self {
        self.stats = stats;
        self
    }

    /// Type a letter into the current row
    ///
    /// Ignored (returns false) once the game is over, when the row is full,
    /// or when `ch` is not an ASCII letter.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.game_state.is_over()
            || self.current_guess.len() >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }
        self.current_guess.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter; false if nothing was removed
    pub fn delete_letter(&mut self) -> bool {
        if self.game_state.is_over() {
            return false;
        }
        self.current_guess.pop().is_some()
    }

    /// Check the typed row without changing anything
    ///
    /// # Errors
    /// - `GameOver` once the game has been won or lost
    /// - `IncompleteGuess` if fewer than 5 letters are typed
    /// - `UnknownWord` if the word is not in the dictionary
    pub fn check_current_guess(&self, words: &WordSource) -> Result<Word, GuessError> {
        if self.game_state.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.current_guess.len() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess);
        }
        if !words.is_valid_guess(&self.current_guess) {
            return Err(GuessError::UnknownWord);
        }
        Word::new(self.current_guess.as_str()).map_err(|_| GuessError::UnknownWord)
    }

    /// Submit the typed row
    ///
    /// On success the guess is scored, the row advances, the keyboard is
    /// updated and, if the game just ended, statistics are recorded. On error
    /// nothing changes; in particular the typed letters stay for editing.
    ///
    /// # Errors
    /// See [`check_current_guess`](Self::check_current_guess).
    ///
    /// # Examples
    /// ```
    /// use wordly::core::{PuzzleDay, Word};
    /// use wordly::game::{GameSession, GameState};
    /// use wordly::wordlists::WordSource;
    ///
    /// let words = WordSource::embedded();
    /// let mut session = GameSession::new(PuzzleDay::new(0), Word::new("crane").unwrap());
    /// for c in "CRANE".chars() {
    ///     session.append_letter(c);
    /// }
    ///
    /// let outcome = session.submit_current_guess(&words).unwrap();
    /// assert_eq!(outcome.state, GameState::Won);
    /// assert_eq!(session.statistics().guess_distribution[0], 1);
    /// ```
    pub fn submit_current_guess(&mut self, words: &WordSource) -> Result<GuessOutcome, GuessError> {
        let guess = self.check_current_guess(words)?;
        let feedback = Feedback::classify(&guess, &self.target_word);
        let row = self.current_row;

        self.guesses.push(guess.clone());
        self.current_guess.clear();
        self.current_row += 1;
        self.keyboard_state.record(&guess, feedback);
        self.game_state = if feedback.is_solved() {
            GameState::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::Playing
        };

        // Only reachable from Playing, so each game is recorded once
        if let Some(outcome) = self.game_state.outcome() {
            self.stats.record_game_end(outcome, self.guesses.len());
        }

        Ok(GuessOutcome {
            guess,
            feedback,
            state: self.game_state,
            row,
        })
    }

    /// Apply one key event
    ///
    /// Letters and backspace return `Ok(None)`; enter submits.
    ///
    /// # Errors
    /// Propagates submit errors for `Key::Enter`.
    pub fn handle_key(
        &mut self,
        key: Key,
        words: &WordSource,
    ) -> Result<Option<GuessOutcome>, GuessError> {
        match key {
            Key::Letter(ch) => {
                self.append_letter(ch);
                Ok(None)
            }
            Key::Backspace => {
                self.delete_letter();
                Ok(None)
            }
            Key::Enter => self.submit_current_guess(words).map(Some),
        }
    }

    /// Start over on `day` with `target`, keeping statistics
    pub fn reset(&mut self, day: PuzzleDay, target: Word) {
        let stats = std::mem::take(&mut self.stats);
        *self = Self::new(day, target).with_statistics(stats);
    }

    #[must_use]
    pub const fn day(&self) -> PuzzleDay {
        self.day
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target_word
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.game_state
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard_state
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Feedback for each submitted guess, in order
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::classify(guess, &self.target_word))
            .collect()
    }

    /// The full 6x5 board
    ///
    /// Submitted rows carry their verdicts, the row being typed shows
    /// `Filled` tiles, everything else is `Empty`.
    #[must_use]
    pub fn rows(&self) -> [[Tile; WORD_LENGTH]; MAX_GUESSES] {
        let mut board = [[Tile::default(); WORD_LENGTH]; MAX_GUESSES];

        for (row, (guess, feedback)) in board
            .iter_mut()
            .zip(self.guesses.iter().zip(self.feedback()))
        {
            for (i, (tile, &verdict)) in row.iter_mut().zip(feedback.verdicts()).enumerate() {
                *tile = Tile {
                    letter: Some(guess.letter_at(i)),
                    verdict,
                };
            }
        }

        if let Some(row) = board.get_mut(self.current_row) {
            for (tile, letter) in row.iter_mut().zip(self.current_guess.chars()) {
                *tile = Tile {
                    letter: Some(letter),
                    verdict: TileVerdict::Filled,
                };
            }
        }

        board
    }

    /// Whether a restored snapshot obeys the session invariants
    ///
    /// The row counter matches the guesses, the typed row is short uppercase
    /// ASCII, the state follows from the guesses, and no guess after a win.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let solved_at = self.guesses.iter().position(|g| *g == self.target_word);
        let expected_state = match solved_at {
            Some(i) if i + 1 == self.guesses.len() => GameState::Won,
            Some(_) => return false,
            None if self.guesses.len() >= MAX_GUESSES => GameState::Lost,
            None => GameState::Playing,
        };

        self.guesses.len() <= MAX_GUESSES
            && self.current_row == self.guesses.len()
            && self.current_guess.len() <= WORD_LENGTH
            && self.current_guess.bytes().all(|b| b.is_ascii_uppercase())
            && (self.current_guess.is_empty() || !expected_state.is_over())
            && self.game_state == expected_state
            && self.keyboard_state.is_well_formed()
    }
}
