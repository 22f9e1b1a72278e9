//! Guess feedback classification
//!
//! A `Feedback` holds one `TileVerdict` per position of a submitted guess.
//! Classification consumes target letters so a repeated guess letter is never
//! credited more often than it occurs in the target.

use super::{TileVerdict, WORD_LENGTH, Word};
use std::fmt;

/// Per-position verdicts for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([TileVerdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([TileVerdict::Correct; WORD_LENGTH]);

    /// Build feedback from explicit verdicts
    #[must_use]
    pub const fn new(verdicts: [TileVerdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the pool
    /// 2. Second pass: left to right, mark present while the pool still holds
    ///    that letter, consuming one; everything else is absent
    ///
    /// # Examples
    /// ```
    /// use wordly::core::{Feedback, TileVerdict, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alloy").unwrap();
    /// let feedback = Feedback::classify(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨🟩🟨⬛⬛");
    /// assert_eq!(feedback.verdicts()[4], TileVerdict::Absent);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        let mut result = [TileVerdict::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: Mark greens (exact position matches)
        for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = TileVerdict::Correct;

                // Remove from available pool
                if let Some(count) = target_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows from whatever the greens left over
        for (i, letter) in guess.chars().iter().enumerate() {
            if result[i] == TileVerdict::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(letter)
                && *count > 0
            {
                result[i] = TileVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Verdicts in board order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[TileVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Count the tiles carrying a given verdict
    #[must_use]
    pub fn count(self, verdict: TileVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬛/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [TileVerdict::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => TileVerdict::Correct,
                'Y' | 'y' | '🟨' => TileVerdict::Present,
                '-' | '_' | '⬛' | '⬜' => TileVerdict::Absent,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert feedback to its share-grid row, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.marker()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileVerdict::{Absent, Correct, Present};

    fn classify(guess: &str, target: &str) -> [TileVerdict; WORD_LENGTH] {
        *Feedback::classify(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).verdicts()
    }

    #[test]
    fn all_absent() {
        assert_eq!(classify("abcde", "fghij"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::classify(&w, &w).is_solved());
        }
    }

    #[test]
    fn slate_against_crane() {
        // A and E share positions 2 and 4 with CRANE
        assert_eq!(
            classify("slate", "crane"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn llama_against_alloy_consumes_counts() {
        // Green L at 1 consumes one L, leaving one for the L at 0.
        // The single A goes to position 2, so the A at 4 finds none left.
        assert_eq!(
            classify("llama", "alloy"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: the O at 3 is green, the O at 1 gets the other O
        assert_eq!(
            classify("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
        // One E in target, matched in place; earlier E gets nothing
        assert_eq!(
            classify("geese", "those"),
            [Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn repeated_guess_letter_single_target_letter() {
        // SPEED vs ABIDE: only one E in target
        assert_eq!(
            classify("speed", "abide"),
            [Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn marked_letters_never_exceed_target_occurrences() {
        let words = ["alloy", "llama", "speed", "erase", "geese", "those", "array", "sassy"];
        for g in words {
            for t in words {
                let guess = Word::new(g).unwrap();
                let target = Word::new(t).unwrap();
                let feedback = Feedback::classify(&guess, &target);

                for (i, verdict) in feedback.verdicts().iter().enumerate() {
                    assert_eq!(
                        *verdict == Correct,
                        guess.chars()[i] == target.chars()[i],
                        "{g} vs {t} at {i}"
                    );
                }

                let counts = target.char_counts();
                for (&letter, &available) in &counts {
                    let marked = guess
                        .chars()
                        .iter()
                        .zip(feedback.verdicts())
                        .filter(|&(&c, &v)| c == letter && v != Absent)
                        .count();
                    assert!(marked <= usize::from(available), "{g} vs {t}: {letter}");
                }
            }
        }
    }

    #[test]
    fn from_str_accepts_letters_and_emoji() {
        let p1 = Feedback::from_str("GYG--").unwrap();
        let p2 = Feedback::from_str("🟩🟨🟩⬛⬜").unwrap();
        let p3 = Feedback::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count(Correct), 2);
        assert_eq!(p1.count(Present), 1);
    }

    #[test]
    fn from_str_invalid() {
        assert!(Feedback::from_str("GYGGYX").is_none());
        assert!(Feedback::from_str("GYG").is_none());
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!(Feedback::from_str("").is_none());
    }

    #[test]
    fn emoji_row() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛🟩🟨");
        assert_eq!(feedback.to_string(), "🟩🟨⬛🟩🟨");
    }
}
