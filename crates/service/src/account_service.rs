//! Roster reads, account edits, and the snooze action.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use touchbase_core::{
    apply_view, derive_status, Account, AccountLedger, AccountOverview, AccountUpdate, ViewState,
};
use touchbase_storage::{Storage, StorageError};

use crate::ServiceError;

/// Roster-wide counts, computed before the filter runs so the summary
/// always describes the whole roster.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RosterSummary {
    pub total: i64,
    pub touched_today: i64,
    pub untouched_today: i64,
}

/// One filtered/sorted pass over the roster plus its summary.
pub struct RosterView {
    pub accounts: Vec<AccountOverview>,
    pub summary: RosterSummary,
    pub all_touched: bool,
}

/// Joins a stored account with its per-day derived fields.
pub(crate) fn assemble_overview(
    account: Account,
    ledger: &AccountLedger,
    today: NaiveDate,
) -> AccountOverview {
    let status = derive_status(ledger, account.renewal_date, today);
    AccountOverview {
        account,
        touch_state: status.touch_state,
        touched_today: status.touch_state.is_touched(),
        last_activity_date: ledger.last_activity_date,
        last_activity_description: ledger.last_activity_description.clone(),
        days_since_last_touch: status.days_since_last_touch,
        open_tasks: ledger.open_tasks,
        days_until_renewal: status.days_until_renewal,
        renewal_band: status.renewal_band,
        active_deals: status.pipeline.active_deals,
        pipeline_value: status.pipeline.pipeline_value,
        top_deal_stage: status.pipeline.top_deal_stage,
        contact_count: ledger.contact_count,
    }
}

pub struct AccountService {
    storage: Arc<Storage>,
}

impl AccountService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Loads every account's ledger, derives status for `today`, and applies
    /// the requested filter/sort. The summary counts run over the unfiltered
    /// roster.
    pub fn list_accounts(
        &self,
        view: ViewState,
        today: NaiveDate,
    ) -> Result<RosterView, ServiceError> {
        let mut overviews = Vec::new();
        for account in self.storage.list_accounts()? {
            let ledger = self.storage.load_ledger(account.id)?;
            overviews.push(assemble_overview(account, &ledger, today));
        }

        let total = overviews.len() as i64;
        let touched_today = overviews.iter().filter(|a| a.touched_today).count() as i64;
        let summary =
            RosterSummary { total, touched_today, untouched_today: total - touched_today };

        let listed = apply_view(overviews, view);
        Ok(RosterView { accounts: listed.accounts, summary, all_touched: listed.all_touched })
    }

    pub fn get_account(
        &self,
        id: i64,
        today: NaiveDate,
    ) -> Result<AccountOverview, ServiceError> {
        let account = self.require_account(id)?;
        let ledger = self.storage.load_ledger(id)?;
        Ok(assemble_overview(account, &ledger, today))
    }

    /// Applies an edit to the account's editable fields. Rejects a body that
    /// names none of them rather than silently succeeding.
    pub fn update_account(
        &self,
        id: i64,
        update: &AccountUpdate,
        today: NaiveDate,
    ) -> Result<AccountOverview, ServiceError> {
        if update.is_empty() {
            return Err(ServiceError::InvalidInput("no editable fields provided".to_owned()));
        }
        self.storage.update_account(id, update)?;
        self.get_account(id, today)
    }

    /// Marks the account handled for `today` without a ledger entry.
    /// Idempotent per day; the streak advances either way.
    pub fn snooze(&self, id: i64, today: NaiveDate) -> Result<AccountOverview, ServiceError> {
        self.require_account(id)?;
        let newly = self.storage.insert_snooze(id, today)?;
        if newly {
            tracing::info!(account_id = id, %today, "account snoozed");
        }
        self.storage.record_streak_touch(today)?;
        self.get_account(id, today)
    }

    fn require_account(&self, id: i64) -> Result<Account, ServiceError> {
        self.storage
            .get_account(id)?
            .ok_or(ServiceError::Storage(StorageError::NotFound { entity: "account", id }))
    }
}
