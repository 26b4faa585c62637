use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use touchbase_core::{Task, TaskInput, TaskUpdate};

use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::response_types::{CreatedResponse, MessageResponse};
use crate::AppState;

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TaskInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let service = Arc::clone(&state.ledger);
    let id = blocking_result(move || service.create_task(&input)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, message: "task created" })))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let service = Arc::clone(&state.ledger);
    blocking_json(move || service.update_task(id, &update)).await
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let service = Arc::clone(&state.ledger);
    blocking_result(move || service.delete_task(id)).await?;
    Ok(Json(MessageResponse { message: "task deleted" }))
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let service = Arc::clone(&state.ledger);
    blocking_json(move || service.list_tasks(id)).await
}
