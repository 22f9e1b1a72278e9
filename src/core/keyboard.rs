//! On-screen keyboard state
//!
//! Maps each letter to the best `KeyVerdict` it has earned so far. Updates go
//! through `KeyVerdict::join`, so the mapping only ever moves up the lattice.

use super::{Feedback, KeyVerdict, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Letter to verdict mapping; letters never guessed are `Unused`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyboard(BTreeMap<char, KeyVerdict>);

impl Keyboard {
    /// Standard QWERTY rows, as drawn by front ends
    pub const ROWS: [&'static str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current verdict for a letter (any case)
    #[must_use]
    pub fn get(&self, letter: char) -> KeyVerdict {
        self.0
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Merge one verdict into a letter
    pub fn merge(&mut self, letter: char, verdict: KeyVerdict) {
        let slot = self.0.entry(letter.to_ascii_uppercase()).or_default();
        *slot = slot.join(verdict);
    }

    /// Fold an already-classified guess into the mapping
    ///
    /// Each letter takes the best verdict any of its tiles received in this
    /// guess, joined with what it had before.
    pub fn record(&mut self, guess: &Word, feedback: Feedback) {
        for (i, &tile) in feedback.verdicts().iter().enumerate() {
            self.merge(guess.letter_at(i), tile.into());
        }
    }

    /// Return a new mapping with `guess` against `target` applied
    ///
    /// # Examples
    /// ```
    /// use wordly::core::{KeyVerdict, Keyboard, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let keys = Keyboard::new()
    ///     .update(&Word::new("track").unwrap(), &target)
    ///     .update(&Word::new("racer").unwrap(), &target);
    ///
    /// // R was green in TRACK and stays green after being yellow in RACER
    /// assert_eq!(keys.get('R'), KeyVerdict::Correct);
    /// assert_eq!(keys.get('K'), KeyVerdict::Absent);
    /// assert_eq!(keys.get('Z'), KeyVerdict::Unused);
    /// ```
    #[must_use]
    pub fn update(&self, guess: &Word, target: &Word) -> Self {
        let mut next = self.clone();
        next.record(guess, Feedback::classify(guess, target));
        next
    }

    /// Letters with a verdict other than `Unused`, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyVerdict)> + '_ {
        self.0
            .iter()
            .filter(|&(_, &v)| v != KeyVerdict::Unused)
            .map(|(&c, &v)| (c, v))
    }

    /// True when every key is an uppercase ASCII letter
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.keys().all(char::is_ascii_uppercase)
    }
}
