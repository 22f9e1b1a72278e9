//! Play statistics across days

use crate::core::MAX_GUESSES;
use serde::{Deserialize, Serialize};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Accumulated history of completed games
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by guess count; index 0 is a win on the first guess
    pub guess_distribution: [u32; MAX_GUESSES],
}

impl Statistics {
    /// Fold one finished game into the totals
    ///
    /// Call once per game, when it first reaches a terminal state. A win with
    /// a guess count outside 1..=6 still counts as a win but lands in no
    /// distribution bucket. Counters saturate at `u32::MAX`.
    pub fn record_game_end(&mut self, outcome: Outcome, guess_count: usize) {
        self.games_played = self.games_played.saturating_add(1);

        match outcome {
            Outcome::Won => {
                self.games_won = self.games_won.saturating_add(1);
                self.current_streak = self.current_streak.saturating_add(1);
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(bucket) = guess_count
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *bucket = bucket.saturating_add(1);
                }
            }
            Outcome::Lost => self.current_streak = 0,
        }
    }

    /// Rounded percentage of games won, 0 before any game
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
    }

    /// Largest distribution bucket, for scaling bar charts
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }

    /// Internal invariants a trustworthy record satisfies
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let distributed: u64 = self.guess_distribution.iter().map(|&n| u64::from(n)).sum();
        self.games_won <= self.games_played
            && self.current_streak <= self.max_streak
            && self.max_streak <= self.games_won
            && distributed <= u64::from(self.games_won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.guess_distribution, [0; MAX_GUESSES]);
        assert_eq!(stats.win_percentage(), 0);
        assert!(stats.is_consistent());
    }

    #[test]
    fn win_updates_streak_and_distribution() {
        let mut stats = Statistics::default();
        stats.record_game_end(Outcome::Won, 2);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = Statistics::default();
        stats.record_game_end(Outcome::Won, 3);
        stats.record_game_end(Outcome::Won, 4);
        stats.record_game_end(Outcome::Lost, 6);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn totals_after_mixed_games() {
        let results = [
            (Outcome::Won, 4),
            (Outcome::Lost, 6),
            (Outcome::Won, 1),
            (Outcome::Won, 6),
            (Outcome::Won, 3),
            (Outcome::Lost, 6),
            (Outcome::Won, 5),
        ];

        let mut stats = Statistics::default();
        let mut previous_max = 0;
        for (outcome, guesses) in results {
            stats.record_game_end(outcome, guesses);
            assert!(stats.max_streak >= previous_max);
            previous_max = stats.max_streak;
            if outcome == Outcome::Lost {
                assert_eq!(stats.current_streak, 0);
            }
            assert!(stats.is_consistent());
        }

        assert_eq!(stats.games_played, 7);
        assert_eq!(stats.games_won, 5);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.guess_distribution, [1, 0, 1, 1, 1, 1]);
        assert_eq!(stats.win_percentage(), 71);
        assert_eq!(stats.max_bucket(), 1);
    }

    #[test]
    fn out_of_range_guess_count_is_not_bucketed() {
        let mut stats = Statistics::default();
        stats.record_game_end(Outcome::Won, 0);
        stats.record_game_end(Outcome::Won, 7);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, [0; MAX_GUESSES]);
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut stats = Statistics {
            games_played: u32::MAX,
            games_won: u32::MAX,
            current_streak: u32::MAX,
            max_streak: u32::MAX,
            guess_distribution: [0, u32::MAX, 0, 0, 0, 0],
        };
        stats.record_game_end(Outcome::Won, 2);

        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.games_won, u32::MAX);
        assert_eq!(stats.current_streak, u32::MAX);
        assert_eq!(stats.max_streak, u32::MAX);
        assert_eq!(stats.guess_distribution[1], u32::MAX);
        assert_eq!(stats.win_percentage(), 100);

        stats.record_game_end(Outcome::Lost, 6);
        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, u32::MAX);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut stats = Statistics::default();
        stats.record_game_end(Outcome::Won, 2);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"gamesPlayed\":1"));
        assert!(json.contains("\"guessDistribution\":[0,1,0,0,0,0]"));

        let back: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn inconsistent_records_are_detected() {
        let stats = Statistics {
            games_played: 1,
            games_won: 3,
            ..Statistics::default()
        };
        assert!(!stats.is_consistent());
    }
}
