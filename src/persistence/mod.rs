//! Persistence gateway
//!
//! Saves and restores the day's session and the long-running statistics as
//! two independent JSON records. Failures are never fatal: the non-`try_`
//! methods log a warning and fall back to a fresh session or zeroed
//! statistics, so play continues in memory.

mod file;
mod memory;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{RecordKey, Store};

use crate::core::PuzzleDay;
use crate::game::{GameSession, Statistics};
use crate::wordlists::WordSource;
use thiserror::Error;

/// Errors surfaced by stores and record decoding
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("corrupt {key} record: {reason}")]
    Corrupt { key: RecordKey, reason: String },
}

/// Explicit handle to the game's persisted state
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: Store> Persistence<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored session if it belongs to `day`
    ///
    /// A session for another day or another target word is stale and reads as
    /// `None`. The returned session carries zeroed statistics; see
    /// [`restore`](Self::restore) for the combined load.
    ///
    /// # Errors
    /// `Unavailable` if the store cannot be read, `Corrupt` if the record does
    /// not decode or breaks session invariants.
    pub fn try_load_session(
        &self,
        day: PuzzleDay,
        words: &WordSource,
    ) -> Result<Option<GameSession>, PersistenceError> {
        let Some(raw) = self.store.read(RecordKey::Session)? else {
            return Ok(None);
        };

        let session: GameSession =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::Corrupt {
                key: RecordKey::Session,
                reason: e.to_string(),
            })?;

        if !session.is_consistent() {
            return Err(PersistenceError::Corrupt {
                key: RecordKey::Session,
                reason: "session invariants violated".to_string(),
            });
        }

        if session.day() != day || *session.target() != words.word_for_day(day) {
            tracing::info!(
                stored_day = %session.day(),
                today = %day,
                "Discarding stale session"
            );
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Load today's session, treating any failure as absent
    #[must_use]
    pub fn load_session(&self, day: PuzzleDay, words: &WordSource) -> Option<GameSession> {
        self.try_load_session(day, words).unwrap_or_else(|e| {
            tracing::warn!("Ignoring saved session: {e}");
            None
        })
    }

    /// Load statistics, `None` if never saved
    ///
    /// # Errors
    /// `Unavailable` if the store cannot be read, `Corrupt` if the record does
    /// not decode or is internally inconsistent.
    pub fn try_load_statistics(&self) -> Result<Option<Statistics>, PersistenceError> {
        let Some(raw) = self.store.read(RecordKey::Statistics)? else {
            return Ok(None);
        };

        let stats: Statistics =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::Corrupt {
                key: RecordKey::Statistics,
                reason: e.to_string(),
            })?;

        if !stats.is_consistent() {
            return Err(PersistenceError::Corrupt {
                key: RecordKey::Statistics,
                reason: "statistics invariants violated".to_string(),
            });
        }

        Ok(Some(stats))
    }

    /// Load statistics, zeroed if absent or unreadable
    #[must_use]
    pub fn load_statistics(&self) -> Statistics {
        match self.try_load_statistics() {
            Ok(stats) => stats.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Resetting statistics: {e}");
                Statistics::default()
            }
        }
    }

    /// Today's session with statistics attached, fresh if nothing matches
    #[must_use]
    pub fn restore(&self, day: PuzzleDay, words: &WordSource) -> GameSession {
        let stats = self.load_statistics();
        match self.load_session(day, words) {
            Some(session) => {
                tracing::info!(
                    day = %day,
                    guesses = session.guesses().len(),
                    "Resumed saved session"
                );
                session.with_statistics(stats)
            }
            None => GameSession::new(day, words.word_for_day(day)).with_statistics(stats),
        }
    }

    /// Persist the session snapshot and its statistics
    ///
    /// # Errors
    /// `Unavailable` if either record cannot be written. The statistics record
    /// is written even when the session write fails.
    pub fn try_save(&self, session: &GameSession) -> Result<(), PersistenceError> {
        let snapshot = encode(RecordKey::Session, session)?;
        let stats = encode(RecordKey::Statistics, session.statistics())?;

        let session_result = self.store.write(RecordKey::Session, &snapshot);
        let stats_result = self.store.write(RecordKey::Statistics, &stats);
        session_result.and(stats_result)
    }

    /// Persist, logging instead of failing
    pub fn save(&self, session: &GameSession) {
        if let Err(e) = self.try_save(session) {
            tracing::warn!("Could not save game: {e}");
        }
    }
}

fn encode<T: serde::Serialize>(key: RecordKey, value: &T) -> Result<String, PersistenceError> {
    serde_json::to_string(value).map_err(|e| PersistenceError::Corrupt {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameState, Outcome};

    fn words() -> WordSource {
        WordSource::from_lists(&["crane", "alloy", "slate"], &["llama", "audio"])
    }

    fn played_session(words: &WordSource) -> GameSession {
        let day = PuzzleDay::new(0);
        let mut session = GameSession::new(day, words.word_for_day(day));
        for c in "SLATE".chars() {
            session.append_letter(c);
        }
        session.submit_current_guess(words).unwrap();
        session.append_letter('c');
        session
    }

    #[test]
    fn empty_store_gives_fresh_state() {
        let persistence = Persistence::new(MemoryStore::new());
        let words = words();

        assert_eq!(persistence.load_session(PuzzleDay::new(0), &words), None);
        assert_eq!(persistence.load_statistics(), Statistics::default());

        let session = persistence.restore(PuzzleDay::new(1), &words);
        assert_eq!(session.target().text(), "ALLOY");
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn save_and_restore_round_trip() {
        let persistence = Persistence::new(MemoryStore::new());
        let words = words();

        let mut stats = Statistics::default();
        stats.record_game_end(Outcome::Won, 3);
        let session = played_session(&words).with_statistics(stats);

        persistence.try_save(&session).unwrap();

        let restored = persistence.restore(PuzzleDay::new(0), &words);
        assert_eq!(restored, session);
        assert_eq!(restored.current_guess(), "C");
        assert_eq!(restored.statistics().games_won, 1);
    }

    #[test]
    fn stale_session_is_discarded_but_statistics_survive() {
        let persistence = Persistence::new(MemoryStore::new());
        let words = words();

        let mut stats = Statistics::default();
        stats.record_game_end(Outcome::Lost, 6);
        persistence.save(&played_session(&words).with_statistics(stats.clone()));

        // Next day has a different target
        assert_eq!(
            persistence
                .try_load_session(PuzzleDay::new(1), &words)
                .unwrap(),
            None
        );

        let restored = persistence.restore(PuzzleDay::new(1), &words);
        assert_eq!(restored.target().text(), "ALLOY");
        assert!(restored.guesses().is_empty());
        assert_eq!(restored.statistics(), &stats);
    }

    #[test]
    fn same_word_on_a_different_day_is_still_stale() {
        let persistence = Persistence::new(MemoryStore::new());
        let words = words();
        persistence.save(&played_session(&words));

        // Day 3 wraps back to CRANE
        assert_eq!(words.word_for_day(PuzzleDay::new(3)).text(), "CRANE");
        assert_eq!(persistence.load_session(PuzzleDay::new(3), &words), None);
    }

    #[test]
    fn mismatched_target_is_discarded() {
        let persistence = Persistence::new(MemoryStore::new());
        let words = words();
        let foreign = GameSession::new(PuzzleDay::new(0), Word::new("llama").unwrap());
        persistence.save(&foreign);

        assert_eq!(persistence.load_session(PuzzleDay::new(0), &words), None);
    }

    #[test]
    fn corrupt_statistics_reset_to_zero() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence
            .store()
            .write(RecordKey::Statistics, "{not json")
            .unwrap();

        assert!(matches!(
            persistence.try_load_statistics(),
            Err(PersistenceError::Corrupt {
                key: RecordKey::Statistics,
                ..
            })
        ));
        assert_eq!(persistence.load_statistics(), Statistics::default());
    }

    #[test]
    fn inconsistent_statistics_reset_to_zero() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence
            .store()
            .write(
                RecordKey::Statistics,
                r#"{"gamesPlayed":1,"gamesWon":5,"currentStreak":0,"maxStreak":0,"guessDistribution":[0,0,0,0,0,0]}"#,
            )
            .unwrap();

        assert!(persistence.try_load_statistics().is_err());
        assert_eq!(persistence.load_statistics(), Statistics::default());
    }

    #[test]
    fn corrupt_session_falls_back_to_fresh() {
        let persistence = Persistence::new(MemoryStore::new());
        let words = words();
        persistence
            .store()
            .write(RecordKey::Session, r#"{"targetWord":"CR"}"#)
            .unwrap();

        assert!(matches!(
            persistence.try_load_session(PuzzleDay::new(0), &words),
            Err(PersistenceError::Corrupt {
                key: RecordKey::Session,
                ..
            })
        ));

        let session = persistence.restore(PuzzleDay::new(0), &words);
        assert_eq!(session.state(), GameState::Playing);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn file_store_survives_restart() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let words = words();
        let session = played_session(&words);

        {
            let persistence = Persistence::new(FileStore::new(temp_dir.path()).unwrap());
            persistence.try_save(&session).unwrap();
        }

        let persistence = Persistence::new(FileStore::new(temp_dir.path()).unwrap());
        let restored = persistence.restore(PuzzleDay::new(0), &words);
        assert_eq!(restored, session);
    }
}
