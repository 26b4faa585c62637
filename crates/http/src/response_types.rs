//! Response types (Serialize)

use serde::Serialize;
use touchbase_core::AccountOverview;
use touchbase_service::{RosterSummary, RosterView};

/// `GET /api/accounts` body: the filtered/sorted cards, the roster-wide
/// summary, and the all-touched celebration signal.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<AccountOverview>,
    pub summary: RosterSummary,
    pub all_touched: bool,
}

impl From<RosterView> for AccountsResponse {
    fn from(roster: RosterView) -> Self {
        Self {
            accounts: roster.accounts,
            summary: roster.summary,
            all_touched: roster.all_touched,
        }
    }
}

/// 201 body for newly created rows.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
