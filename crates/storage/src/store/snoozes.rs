//! Snooze markers: per-account, per-day, idempotent.

use chrono::NaiveDate;
use rusqlite::params;

use super::Storage;
use crate::StorageError;

impl Storage {
    /// Sets the snooze marker for `day`. Returns false if the marker was
    /// already present (repeat snoozes are a no-op, not an error).
    pub fn insert_snooze(&self, account_id: i64, day: NaiveDate) -> Result<bool, StorageError> {
        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO snoozes (account_id, snooze_date) VALUES (?1, ?2)",
            params![account_id, day.to_string()],
        )?;
        Ok(inserted > 0)
    }
}
