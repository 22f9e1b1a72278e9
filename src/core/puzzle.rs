//! Daily puzzle numbering
//!
//! A `PuzzleDay` is the number of whole days between the fixed epoch and a
//! local calendar date. It picks the day's answer and is the puzzle number in
//! share text.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day index counted from 2021-06-19
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PuzzleDay(u32);

impl PuzzleDay {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The epoch date, day 0
    #[must_use]
    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or(NaiveDate::MIN)
    }

    /// Day index for a calendar date
    ///
    /// Dates before the epoch saturate to day 0.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordly::core::PuzzleDay;
    ///
    /// let day = PuzzleDay::from_date(NaiveDate::from_ymd_opt(2022, 6, 19).unwrap());
    /// assert_eq!(day.index(), 365);
    /// ```
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let days = date.signed_duration_since(Self::epoch()).num_days();
        Self(u32::try_from(days.max(0)).unwrap_or(u32::MAX))
    }

    /// Day index for the local calendar date right now
    ///
    /// Reads the clock; call once per session start, not mid-game.
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Calendar date this puzzle belongs to
    #[must_use]
    pub fn date(self) -> NaiveDate {
        Self::epoch()
            .checked_add_days(Days::new(u64::from(self.0)))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for PuzzleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(PuzzleDay::from_date(date(2021, 6, 19)), PuzzleDay::new(0));
        assert_eq!(PuzzleDay::from_date(date(2021, 6, 20)), PuzzleDay::new(1));
    }

    #[test]
    fn dates_before_epoch_saturate() {
        assert_eq!(PuzzleDay::from_date(date(2021, 6, 18)).index(), 0);
        assert_eq!(PuzzleDay::from_date(date(1999, 1, 1)).index(), 0);
    }

    #[test]
    fn monotonic_over_consecutive_dates() {
        let mut previous = PuzzleDay::from_date(date(2021, 1, 1));
        let mut current = date(2021, 1, 1);
        for _ in 0..1000 {
            current = current.succ_opt().unwrap();
            let day = PuzzleDay::from_date(current);
            assert!(day >= previous);
            previous = day;
        }
    }

    #[test]
    fn date_round_trips() {
        for index in [0, 1, 365, 1946] {
            let day = PuzzleDay::new(index);
            assert_eq!(PuzzleDay::from_date(day.date()), day);
        }
    }

    #[test]
    fn today_is_after_epoch() {
        assert!(PuzzleDay::today().index() > 0);
    }
}
