//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, constraint
//! violation, pool exhaustion) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Unique constraint violation (duplicate seed row, repeat snooze).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL or connection failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Could not obtain a pooled connection.
    #[error("connection pool error: {0}")]
    Pool(String),

    /// Row data could not be decoded into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// Constraint violations map to `Duplicate`, row-decode failures to
/// `DataCorruption`; callers remap `QueryReturnedNoRows` themselves where
/// entity context is known.
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Duplicate(msg.unwrap_or_else(|| e.to_string()))
            },
            rusqlite::Error::FromSqlConversionFailure(idx, ty, source) => {
                Self::DataCorruption {
                    context: format!("column {idx} ({ty}) failed to decode"),
                    source,
                }
            },
            other => Self::Database(other),
        }
    }
}

impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Pool(err.to_string())
    }
}
