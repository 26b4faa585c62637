//! Google Sheets push adapter for touchbase
//!
//! One-directional: unsynced ledger rows go out, nothing comes back. The
//! [`SheetPush`] trait is the injected capability the service layer depends
//! on; [`SheetsClient`] is the real implementation over the Sheets v4 REST
//! API. Core logic never depends on this adapter being configured.

mod client;
mod error;
mod port;

pub use client::SheetsClient;
pub use error::SheetsError;
pub use port::SheetPush;
