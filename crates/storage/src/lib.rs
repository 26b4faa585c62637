//! Storage layer for touchbase
//!
//! SQLite via rusqlite with an r2d2 connection pool. The schema stores raw
//! ledger entries only; derived per-day state is recomputed by the core
//! engines on every read.

mod error;
mod migrations;
mod store;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use store::{SyncCounts, UnsyncedActivity, UnsyncedNote, UnsyncedTask};
pub use store::Storage;
