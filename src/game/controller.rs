//! Serialized dispatcher between front ends and the session
//!
//! The controller owns the word source, the persistence handle and the live
//! session. Every mutation goes through it one at a time and is saved
//! straight after.

use super::input::Key;
use super::session::{GameSession, GuessError, GuessOutcome};
use crate::core::{PuzzleDay, Word};
use crate::persistence::{Persistence, Store};
use crate::wordlists::WordSource;

pub struct Controller<S: Store> {
    words: WordSource,
    persistence: Persistence<S>,
    session: GameSession,
}

impl<S: Store> Controller<S> {
    /// Resume the saved session for `day`, or start a fresh one
    #[must_use]
    pub fn start(words: WordSource, persistence: Persistence<S>, day: PuzzleDay) -> Self {
        let session = persistence.restore(day, &words);
        tracing::info!(
            day = %day,
            state = ?session.state(),
            "Session ready"
        );
        Self {
            words,
            persistence,
            session,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn words(&self) -> &WordSource {
        &self.words
    }

    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Apply one key event and save
    ///
    /// # Errors
    /// Returns the rejection for an unacceptable `Key::Enter`; the session is
    /// unchanged in that case.
    pub fn handle_key(&mut self, key: Key) -> Result<Option<GuessOutcome>, GuessError> {
        match key {
            Key::Enter => self.submit().map(Some),
            Key::Letter(ch) => {
                self.type_letter(ch);
                Ok(None)
            }
            Key::Backspace => {
                self.delete_letter();
                Ok(None)
            }
        }
    }

    /// Append a letter to the typed row and save; false if it was ignored
    pub fn type_letter(&mut self, ch: char) -> bool {
        let changed = self.session.append_letter(ch);
        if changed {
            self.persistence.save(&self.session);
        }
        changed
    }

    /// Drop the last typed letter and save; false if there was none
    pub fn delete_letter(&mut self) -> bool {
        let changed = self.session.delete_letter();
        if changed {
            self.persistence.save(&self.session);
        }
        changed
    }

    /// Preflight the typed row without committing it
    ///
    /// # Errors
    /// Same conditions as [`GameSession::check_current_guess`].
    pub fn check_current_guess(&self) -> Result<Word, GuessError> {
        self.session.check_current_guess(&self.words)
    }

    /// Commit the typed row and save
    ///
    /// # Errors
    /// Same conditions as [`GameSession::submit_current_guess`].
    pub fn submit(&mut self) -> Result<GuessOutcome, GuessError> {
        let outcome = match self.session.submit_current_guess(&self.words) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(typed = self.session.current_guess(), "Guess rejected: {e}");
                return Err(e);
            }
        };

        if outcome.state.is_over() {
            let stats = self.session.statistics();
            tracing::info!(
                day = %self.session.day(),
                state = ?outcome.state,
                guesses = outcome.row + 1,
                played = stats.games_played,
                streak = stats.current_streak,
                "Game finished"
            );
        }

        self.persistence.save(&self.session);
        Ok(outcome)
    }

    /// Start over on `day`, keeping statistics, and save
    pub fn reset(&mut self, day: PuzzleDay) {
        let target = self.words.word_for_day(day);
        self.session.reset(day, target);
        tracing::info!(day = %day, "Session reset");
        self.persistence.save(&self.session);
    }
}
