// src/handler/bookings.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::bookingdb::BookingExt,
    dtos::bookingdtos::CreateBookingDto,
    error::HttpError,
    models::bookingmodel::BookingStatus,
    AppState,
};

pub fn booking_handler() -> Router {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/:booking_id/cancel", put(cancel_booking))
        .route("/:booking_id/pay", post(pay_booking))
}

pub async fn list_bookings(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let bookings = app_state.db_client.get_bookings().await.map_err(|e| {
        tracing::error!("failed to list bookings: {}", e);
        HttpError::server_error("Internal server error")
    })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": bookings
    })))
}

pub async fn create_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let status = match body.status.as_deref() {
        Some(raw) => raw
            .parse::<BookingStatus>()
            .map_err(HttpError::bad_request)?,
        None => BookingStatus::Upcoming,
    };

    let outcome = app_state
        .booking_service
        .create_booking(
            body.contractor_id,
            body.date.trim().to_string(),
            body.time.trim().to_string(),
            status,
            body.price,
            body.notes,
            body.user_id,
        )
        .await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": outcome.booking,
        "warnings": outcome.warnings
    })))
}

pub async fn cancel_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let outcome = app_state.booking_service.cancel_booking(booking_id).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": outcome.booking,
        "warnings": outcome.warnings
    })))
}

pub async fn pay_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let outcome = app_state.booking_service.pay_booking(booking_id).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": outcome.booking,
        "warnings": outcome.warnings
    })))
}
