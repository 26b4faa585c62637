//! Typed error enum for the service layer.
//!
//! Unifies storage and sheets failures into a single error type, enabling
//! callers to match on specific failure modes instead of downcasting opaque
//! `anyhow::Error` boxes.

use thiserror::Error;
use touchbase_sheets::SheetsError;
use touchbase_storage::StorageError;

/// Service-layer error unifying storage and sheets failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Sheets API call failed.
    #[error("sheets: {0}")]
    Sheets(#[from] SheetsError),

    /// Caller provided invalid input (empty text, malformed data).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Required backend (Google Sheets) is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }
}
