use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{DealStage, RenewalBand, TouchState};

/// A strategic account as stored. The roster is seeded once and never
/// created or deleted through normal use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub renewal_date: Option<NaiveDate>,
    pub annual_value: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Editable account fields for `PUT /api/accounts/{id}`.
///
/// `None` means "leave unchanged"; the name and id are not editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountUpdate {
    pub industry: Option<String>,
    pub location: Option<String>,
    pub renewal_date: Option<NaiveDate>,
    pub annual_value: Option<f64>,
}

impl AccountUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.industry.is_none()
            && self.location.is_none()
            && self.renewal_date.is_none()
            && self.annual_value.is_none()
    }
}

/// An account joined with every per-day derived field.
///
/// Derived fields are recomputed from the ledger on each read — they are
/// never stored, so they cannot drift from the entries that produce them.
#[derive(Debug, Clone, Serialize)]
pub struct AccountOverview {
    #[serde(flatten)]
    pub account: Account,
    pub touch_state: TouchState,
    pub touched_today: bool,
    pub last_activity_date: Option<NaiveDate>,
    pub last_activity_description: Option<String>,
    pub days_since_last_touch: Option<i64>,
    pub open_tasks: i64,
    pub days_until_renewal: Option<i64>,
    pub renewal_band: Option<RenewalBand>,
    pub active_deals: i64,
    pub pipeline_value: f64,
    pub top_deal_stage: Option<DealStage>,
    pub contact_count: i64,
}
