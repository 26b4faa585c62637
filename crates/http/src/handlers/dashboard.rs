use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use touchbase_core::DashboardSummary;

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::{today, AppState};

pub async fn summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let service = Arc::clone(&state.dashboard);
    let today = today();
    blocking_json(move || service.summary(today)).await
}
