use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use touchbase_core::{Activity, ActivityInput};

use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::query_types::ListQuery;
use crate::response_types::CreatedResponse;
use crate::{today, AppState};

pub async fn log_activity(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ActivityInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let service = Arc::clone(&state.ledger);
    let today = today();
    let id = blocking_result(move || service.log_activity(&input, today)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, message: "activity logged" })))
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    let service = Arc::clone(&state.ledger);
    let limit = query.capped_limit();
    let offset = query.offset;
    blocking_json(move || service.list_activities(id, limit, offset)).await
}
