//! Helpers for running blocking service calls in async handlers.
//!
//! Storage is synchronous rusqlite behind a pool, so every handler hops to
//! the blocking thread pool. These helpers fold the join-error and
//! service-error plumbing into one call.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;
use touchbase_service::ServiceError;

/// Runs a blocking closure and wraps the result in `Json`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    blocking_result(f).await.map(Json)
}

/// Runs a blocking closure and returns the raw value for further handling.
pub async fn blocking_result<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task panicked: {e}")))?
        .map_err(ApiError::from)
}
