use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use touchbase_service::SyncReport;
use touchbase_storage::SyncCounts;

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::AppState;

pub async fn status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SyncCounts>, ApiError> {
    let service = Arc::clone(&state.sync);
    blocking_json(move || service.status()).await
}

/// The push itself is async HTTP; only the storage reads inside it block,
/// and those are short enough to run on the runtime directly.
pub async fn full_sync(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SyncReport>, ApiError> {
    let report = state.sync.full_sync().await?;
    Ok(Json(report))
}
