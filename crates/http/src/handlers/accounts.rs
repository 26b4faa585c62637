use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;

use touchbase_core::{AccountOverview, AccountUpdate};

use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::query_types::AccountsQuery;
use crate::response_types::AccountsResponse;
use crate::{today, AppState};

pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AccountsQuery>,
) -> Result<Json<AccountsResponse>, ApiError> {
    let view = query.view_state()?;
    let service = Arc::clone(&state.accounts);
    let today = today();
    let roster = blocking_result(move || service.list_accounts(view, today)).await?;
    Ok(Json(AccountsResponse::from(roster)))
}

pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AccountOverview>, ApiError> {
    let service = Arc::clone(&state.accounts);
    let today = today();
    blocking_json(move || service.get_account(id, today)).await
}

pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<AccountUpdate>,
) -> Result<Json<AccountOverview>, ApiError> {
    let service = Arc::clone(&state.accounts);
    let today = today();
    blocking_json(move || service.update_account(id, &update, today)).await
}

pub async fn snooze_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AccountOverview>, ApiError> {
    let service = Arc::clone(&state.accounts);
    let today = today();
    blocking_json(move || service.snooze(id, today)).await
}
