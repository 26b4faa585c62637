use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use touchbase_core::{Note, NoteInput};

use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::response_types::CreatedResponse;
use crate::{today, AppState};

pub async fn add_note(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NoteInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let service = Arc::clone(&state.ledger);
    let today = today();
    let id = blocking_result(move || service.add_note(&input, today)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, message: "note added" })))
}

pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let service = Arc::clone(&state.ledger);
    blocking_json(move || service.list_notes(id)).await
}
