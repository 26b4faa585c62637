//! HTTP API server for touchbase.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(missing_copy_implementations, reason = "Types may grow")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use chrono::{Local, NaiveDate};
use tower_http::cors::CorsLayer;

use touchbase_service::{
    AccountService, CrmService, DashboardService, LedgerService, SyncService,
};

/// Shared application state for all HTTP handlers.
///
/// Contains service instances, wrapped in `Arc` for thread-safe sharing
/// across handlers.
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub ledger: Arc<LedgerService>,
    pub crm: Arc<CrmService>,
    pub dashboard: Arc<DashboardService>,
    pub sync: Arc<SyncService>,
}

/// The reference date for all derived state in one request.
///
/// Computed once per request so a request straddling midnight sees a single
/// consistent day.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/accounts", get(handlers::accounts::list_accounts))
        .route("/api/accounts/{id}", get(handlers::accounts::get_account))
        .route("/api/accounts/{id}", put(handlers::accounts::update_account))
        .route("/api/accounts/{id}/snooze", post(handlers::accounts::snooze_account))
        .route("/api/accounts/{id}/activities", get(handlers::activities::list_activities))
        .route("/api/accounts/{id}/tasks", get(handlers::tasks::list_tasks))
        .route("/api/accounts/{id}/notes", get(handlers::notes::list_notes))
        .route("/api/accounts/{id}/deals", get(handlers::crm::list_deals))
        .route("/api/accounts/{id}/contacts", get(handlers::crm::list_contacts))
        .route("/api/activities", post(handlers::activities::log_activity))
        .route("/api/notes", post(handlers::notes::add_note))
        .route("/api/tasks", post(handlers::tasks::create_task))
        .route("/api/tasks/{id}", put(handlers::tasks::update_task))
        .route("/api/tasks/{id}", delete(handlers::tasks::delete_task))
        .route("/api/deals", post(handlers::crm::create_deal))
        .route("/api/deals/{id}", put(handlers::crm::update_deal))
        .route("/api/deals/{id}", delete(handlers::crm::delete_deal))
        .route("/api/contacts", post(handlers::crm::create_contact))
        .route("/api/contacts/{id}", put(handlers::crm::update_contact))
        .route("/api/contacts/{id}", delete(handlers::crm::delete_contact))
        .route("/api/dashboard", get(handlers::dashboard::summary))
        .route("/api/sync/status", get(handlers::sync::status))
        .route("/api/sync", post(handlers::sync::full_sync))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
