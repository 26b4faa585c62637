//! The capability boundary the service layer injects.

use async_trait::async_trait;

use crate::SheetsError;

/// One-way push of tabular rows to an external spreadsheet.
///
/// Implementations must tolerate being handed the same rows twice:
/// delivery is at-least-once and dedup belongs to the external system (or
/// the caller's synced-row markers).
#[async_trait]
pub trait SheetPush: Send + Sync {
    /// Appends `rows` to the named sheet tab, creating the tab and writing
    /// `headers` into an empty first row when needed. Returns the number of
    /// rows appended.
    async fn push(
        &self,
        sheet: &str,
        headers: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Result<usize, SheetsError>;
}
