//! Service layer for touchbase
//!
//! Centralizes business logic between the HTTP handlers and storage/sheets:
//! input validation, overview assembly, streak bookkeeping, and sync
//! orchestration. Handlers stay thin; storage stays dumb.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod account_service;
mod crm_service;
mod dashboard_service;
mod error;
mod ledger_service;
mod sync_service;

pub use account_service::{AccountService, RosterSummary, RosterView};
pub use crm_service::CrmService;
pub use dashboard_service::DashboardService;
pub use error::ServiceError;
pub use ledger_service::LedgerService;
pub use sync_service::{SyncReport, SyncService};
