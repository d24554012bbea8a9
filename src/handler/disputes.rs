// src/handler/disputes.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, disputedb::DisputeExt},
    dtos::disputedtos::CreateDisputeDto,
    error::HttpError,
    models::disputemodel::DisputeType,
    utils::validation::normalize_email,
    AppState,
};

pub fn dispute_handler() -> Router {
    Router::new().route("/", get(list_disputes).post(create_dispute))
}

pub async fn list_disputes(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let disputes = app_state.db_client.get_disputes().await.map_err(|e| {
        tracing::error!("failed to list disputes: {}", e);
        HttpError::server_error("Internal server error")
    })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": disputes
    })))
}

pub async fn create_dispute(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateDisputeDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let dispute_type = body
        .dispute_type
        .parse::<DisputeType>()
        .map_err(HttpError::bad_request)?;

    // Stored lowercased so the support team can match complainants reliably.
    let email = body
        .email
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .map(normalize_email)
        .transpose()
        .map_err(HttpError::bad_request)?;

    if let Some(booking_id) = body.booking_id {
        app_state
            .db_client
            .get_booking(booking_id)
            .await
            .map_err(|e| {
                tracing::error!("failed to fetch booking {}: {}", booking_id, e);
                HttpError::server_error("Internal server error")
            })?
            .ok_or_else(|| HttpError::bad_request("Referenced booking does not exist"))?;
    }

    let dispute = app_state
        .db_client
        .create_dispute(
            body.booking_id,
            body.name.map(|n| n.trim().to_string()),
            email,
            dispute_type,
            body.description.trim().to_string(),
            body.user_id,
        )
        .await
        .map_err(|e| {
            tracing::error!("failed to create dispute: {}", e);
            HttpError::server_error("Internal server error")
        })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": dispute
    })))
}
