use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use touchbase_core::{
    Contact, ContactInput, ContactUpdate, Deal, DealInput, DealUpdate,
};

use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::response_types::{CreatedResponse, MessageResponse};
use crate::AppState;

pub async fn create_deal(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DealInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let service = Arc::clone(&state.crm);
    let id = blocking_result(move || service.create_deal(&input)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, message: "deal created" })))
}

pub async fn update_deal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<DealUpdate>,
) -> Result<Json<Deal>, ApiError> {
    let service = Arc::clone(&state.crm);
    blocking_json(move || service.update_deal(id, &update)).await
}

pub async fn delete_deal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let service = Arc::clone(&state.crm);
    blocking_result(move || service.delete_deal(id)).await?;
    Ok(Json(MessageResponse { message: "deal deleted" }))
}

pub async fn list_deals(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Deal>>, ApiError> {
    let service = Arc::clone(&state.crm);
    blocking_json(move || service.list_deals(id)).await
}

pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ContactInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let service = Arc::clone(&state.crm);
    let id = blocking_result(move || service.create_contact(&input)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, message: "contact created" })))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<ContactUpdate>,
) -> Result<Json<Contact>, ApiError> {
    let service = Arc::clone(&state.crm);
    blocking_json(move || service.update_contact(id, &update)).await
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let service = Arc::clone(&state.crm);
    blocking_result(move || service.delete_contact(id)).await?;
    Ok(Json(MessageResponse { message: "contact deleted" }))
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let service = Arc::clone(&state.crm);
    blocking_json(move || service.list_contacts(id)).await
}
