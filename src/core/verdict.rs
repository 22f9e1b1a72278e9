//! Tile and keyboard verdicts
//!
//! `TileVerdict` classifies one position of one guess. `KeyVerdict` is the
//! aggregated state of a keyboard letter and forms a lattice:
//! `Unused < Absent < Present < Correct`. Merging two key verdicts takes the
//! least upper bound, so a letter never moves back down once it was shown
//! higher.

use serde::{Deserialize, Serialize};

/// Classification of a single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileVerdict {
    /// No letter typed yet
    #[default]
    Empty,
    /// Letter typed but not submitted (display only)
    Filled,
    /// Letter in the word, right position
    Correct,
    /// Letter in the word, wrong position
    Present,
    /// Letter not in the word (or all its occurrences already accounted for)
    Absent,
}

impl TileVerdict {
    /// True for the three outcomes a submitted guess can produce
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// Share-grid marker for a scored tile
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty | Self::Filled => '⬜',
        }
    }
}

/// Aggregated state of a keyboard letter across all guesses
///
/// Variant order is the lattice order; `Ord` is derived from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KeyVerdict {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl KeyVerdict {
    /// Least upper bound of two verdicts
    ///
    /// Commutative, associative and idempotent, so merge order never matters.
    ///
    /// # Examples
    /// ```
    /// use wordly::core::KeyVerdict;
    ///
    /// assert_eq!(KeyVerdict::Correct.join(KeyVerdict::Absent), KeyVerdict::Correct);
    /// assert_eq!(KeyVerdict::Unused.join(KeyVerdict::Present), KeyVerdict::Present);
    /// ```
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        self.max(other)
    }
}

impl From<TileVerdict> for KeyVerdict {
    fn from(tile: TileVerdict) -> Self {
        match tile {
            TileVerdict::Correct => Self::Correct,
            TileVerdict::Present => Self::Present,
            TileVerdict::Absent => Self::Absent,
            TileVerdict::Empty | TileVerdict::Filled => Self::Unused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [KeyVerdict; 4] = [
        KeyVerdict::Unused,
        KeyVerdict::Absent,
        KeyVerdict::Present,
        KeyVerdict::Correct,
    ];

    #[test]
    fn join_is_commutative_and_idempotent() {
        for a in ALL {
            assert_eq!(a.join(a), a);
            for b in ALL {
                assert_eq!(a.join(b), b.join(a));
            }
        }
    }

    #[test]
    fn join_is_associative() {
        for a in ALL {
            for b in ALL {
                for c in ALL {
                    assert_eq!(a.join(b).join(c), a.join(b.join(c)));
                }
            }
        }
    }

    #[test]
    fn unused_is_bottom_and_correct_is_top() {
        for v in ALL {
            assert_eq!(KeyVerdict::Unused.join(v), v);
            assert_eq!(KeyVerdict::Correct.join(v), KeyVerdict::Correct);
        }
    }

    #[test]
    fn tile_conversion() {
        assert_eq!(KeyVerdict::from(TileVerdict::Correct), KeyVerdict::Correct);
        assert_eq!(KeyVerdict::from(TileVerdict::Present), KeyVerdict::Present);
        assert_eq!(KeyVerdict::from(TileVerdict::Absent), KeyVerdict::Absent);
        assert_eq!(KeyVerdict::from(TileVerdict::Filled), KeyVerdict::Unused);
    }

    #[test]
    fn only_submitted_outcomes_are_scored() {
        assert!(TileVerdict::Correct.is_scored());
        assert!(TileVerdict::Absent.is_scored());
        assert!(!TileVerdict::Filled.is_scored());
        assert!(!TileVerdict::Empty.is_scored());
    }
}
