//! Persisted touch streak counter (single-row table).

use chrono::NaiveDate;
use rusqlite::params;
use touchbase_core::StreakState;

use super::{Storage, opt_date};
use crate::StorageError;

impl Storage {
    pub fn streak_state(&self) -> Result<StreakState, StorageError> {
        let conn = self.conn()?;
        let state = conn.query_row(
            "SELECT current, last_touch_date FROM touch_streak WHERE id = 1",
            [],
            |row| {
                Ok(StreakState {
                    current: row.get(0)?,
                    last_touch_date: opt_date(row.get(1)?)?,
                })
            },
        )?;
        Ok(state)
    }

    /// Advances the streak for a touch on `day` and persists the result.
    /// Same-day touches leave the counter unchanged.
    pub fn record_streak_touch(&self, day: NaiveDate) -> Result<StreakState, StorageError> {
        let next = self.streak_state()?.record_touch(day);
        let conn = self.conn()?;
        conn.execute(
            "UPDATE touch_streak SET current = ?1, last_touch_date = ?2 WHERE id = 1",
            params![next.current, next.last_touch_date.map(|d| d.to_string())],
        )?;
        Ok(next)
    }
}
