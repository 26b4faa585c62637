//! Touch streak state machine.
//!
//! The streak counts consecutive calendar days with at least one touch
//! anywhere on the roster. It needs cross-day history a single ledger
//! snapshot cannot reconstruct, so the counter is persisted and advanced on
//! every touch event. A snoozed-only day counts: a snooze is a touch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current: i64,
    pub last_touch_date: Option<NaiveDate>,
}

impl StreakState {
    /// Advances the counter for a touch on `day`. Same-day touches are
    /// idempotent; the next day extends; a gap resets to 1. A backdated
    /// touch (before the last recorded day) cannot rewrite history and
    /// leaves the counter alone.
    #[must_use]
    pub fn record_touch(self, day: NaiveDate) -> Self {
        let current = match self.last_touch_date {
            Some(last) if day < last => return self,
            Some(last) if last == day => self.current,
            Some(last) if (day - last).num_days() == 1 => self.current + 1,
            _ => 1,
        };
        Self { current, last_touch_date: Some(day) }
    }

    /// The streak to display: the run ending yesterday, or today if today
    /// already has a touch. A last touch older than yesterday means the
    /// run is broken.
    #[must_use]
    pub fn displayed(self, today: NaiveDate) -> i64 {
        match self.last_touch_date {
            Some(last) if (today - last).num_days() <= 1 => self.current,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn consecutive_days_extend() {
        let state = StreakState::default()
            .record_touch(day("2025-03-01"))
            .record_touch(day("2025-03-02"))
            .record_touch(day("2025-03-03"));
        assert_eq!(state.current, 3);
    }

    #[test]
    fn same_day_is_idempotent() {
        let state = StreakState::default()
            .record_touch(day("2025-03-01"))
            .record_touch(day("2025-03-01"));
        assert_eq!(state.current, 1);
    }

    #[test]
    fn gap_resets_to_one() {
        let state = StreakState::default()
            .record_touch(day("2025-03-01"))
            .record_touch(day("2025-03-04"));
        assert_eq!(state.current, 1);
        assert_eq!(state.last_touch_date, Some(day("2025-03-04")));
    }

    #[test]
    fn displayed_allows_yesterday_grace() {
        let state = StreakState { current: 4, last_touch_date: Some(day("2025-03-02")) };
        assert_eq!(state.displayed(day("2025-03-02")), 4);
        assert_eq!(state.displayed(day("2025-03-03")), 4);
        assert_eq!(state.displayed(day("2025-03-04")), 0);
    }

    #[test]
    fn displayed_is_zero_with_no_history() {
        assert_eq!(StreakState::default().displayed(day("2025-03-02")), 0);
    }
}
