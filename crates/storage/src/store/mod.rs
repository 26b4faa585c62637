//! SQLite store, split by resource.

mod accounts;
mod activities;
mod contacts;
mod deals;
mod ledger;
mod notes;
mod snoozes;
mod streak;
mod sync;
mod tasks;

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::StorageError;
use crate::migrations;

pub use sync::{SyncCounts, UnsyncedActivity, UnsyncedNote, UnsyncedTask};

pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage handle wrapping an SQLite connection pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

impl Storage {
    /// Opens (or creates) the database at `db_path` and runs migrations.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
            conn.pragma_update(None, "busy_timeout", 5000i32)?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            Ok(())
        });
        let pool = Pool::builder()
            .build(manager)
            .map_err(|e| StorageError::Migration(format!("pool init failed: {e}")))?;
        let storage = Self { pool };
        let conn = storage.conn()?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        Ok(storage)
    }

    pub(crate) fn conn(&self) -> Result<PooledConn, StorageError> {
        Ok(self.pool.get()?)
    }
}

// ── row decoding helpers ─────────────────────────────────────────

/// Parse a `YYYY-MM-DD` column into a `NaiveDate`.
pub(crate) fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    s.parse().map_err(|e| rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(e),
    ))
}

/// Parse an RFC 3339 timestamp column into `DateTime<Utc>`.
pub(crate) fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(e),
        ))
}

/// Parse a stable wire string (activity type, stage, role, status).
pub(crate) fn parse_wire<T>(s: &str) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    s.parse().map_err(|e: T::Err| rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        e.into(),
    ))
}

pub(crate) fn opt_date(s: Option<String>) -> rusqlite::Result<Option<NaiveDate>> {
    s.as_deref().map(parse_date).transpose()
}

pub(crate) fn opt_datetime(s: Option<String>) -> rusqlite::Result<Option<DateTime<Utc>>> {
    s.as_deref().map(parse_datetime).transpose()
}
