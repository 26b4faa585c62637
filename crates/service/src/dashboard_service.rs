//! Dashboard assembly: roster reduction plus the storage-only counters.

use std::sync::Arc;

use chrono::NaiveDate;
use touchbase_core::{summarize, DashboardSummary};
use touchbase_storage::Storage;

use crate::account_service::assemble_overview;
use crate::ServiceError;

pub struct DashboardService {
    storage: Arc<Storage>,
}

impl DashboardService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn summary(&self, today: NaiveDate) -> Result<DashboardSummary, ServiceError> {
        let mut overviews = Vec::new();
        let mut ledgers = Vec::new();
        for account in self.storage.list_accounts()? {
            let ledger = self.storage.load_ledger(account.id)?;
            overviews.push(assemble_overview(account, &ledger, today));
            ledgers.push(ledger);
        }
        let overdue = self.storage.count_overdue_tasks(today)?;
        let streak = self.storage.streak_state()?;
        Ok(summarize(&overviews, &ledgers, overdue, streak, today))
    }
}
