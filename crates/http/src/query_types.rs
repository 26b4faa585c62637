//! Request/query types (Deserialize)

use serde::Deserialize;
use touchbase_core::{SortKey, TouchFilter, ViewState, DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT};

use crate::api_error::ApiError;

const fn default_limit() -> usize {
    DEFAULT_QUERY_LIMIT
}

/// `?filter=&sort=` on the account list. Unknown values are a caller error,
/// not something to silently default away.
#[derive(Debug, Default, Deserialize)]
pub struct AccountsQuery {
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl AccountsQuery {
    pub fn view_state(&self) -> Result<ViewState, ApiError> {
        let filter = match self.filter.as_deref() {
            None => TouchFilter::default(),
            Some(s) => s.parse().map_err(ApiError::BadRequest)?,
        };
        let sort = match self.sort.as_deref() {
            None => SortKey::default(),
            Some(s) => s.parse().map_err(ApiError::BadRequest)?,
        };
        Ok(ViewState { filter, sort })
    }
}

/// Pagination for sub-resource listings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { limit: DEFAULT_QUERY_LIMIT, offset: 0 }
    }
}

impl ListQuery {
    /// Cap limit to prevent unbounded queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_QUERY_LIMIT)
    }
}
