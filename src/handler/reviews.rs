// src/handler/reviews.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::post, Extension, Json, Router};
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, contractordb::ContractorExt, reviewdb::ReviewExt},
    dtos::reviewdtos::CreateReviewDto,
    error::HttpError,
    models::bookingmodel::BookingStatus,
    AppState,
};

pub fn review_handler() -> Router {
    Router::new().route("/", post(create_review))
}

/// Reviews attach to a completed booking; the contractor is taken from the
/// booking rather than trusted from the payload.
pub async fn create_review(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let booking = app_state
        .db_client
        .get_booking(body.booking_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch booking {}: {}", body.booking_id, e);
            HttpError::server_error("Internal server error")
        })?
        .ok_or_else(|| HttpError::not_found("Booking not found"))?;

    if booking.status != BookingStatus::Completed {
        return Err(HttpError::bad_request(
            "Only completed bookings can be reviewed",
        ));
    }

    let review = app_state
        .db_client
        .create_review(
            booking.id,
            booking.contractor_id,
            body.rating,
            body.comment.map(|c| c.trim().to_string()),
            body.user_id,
        )
        .await
        .map_err(|e| {
            tracing::error!("failed to create review: {}", e);
            HttpError::server_error("Internal server error")
        })?;

    // Best effort: the review itself is saved even if the cached aggregate
    // on the contractor row lags behind.
    let mut warnings: Vec<String> = Vec::new();
    if let Err(err) = app_state
        .db_client
        .refresh_contractor_rating(booking.contractor_id)
        .await
    {
        tracing::warn!(
            "rating not refreshed for contractor {}: {}",
            booking.contractor_id,
            err
        );
        warnings.push("Contractor rating could not be refreshed".to_string());
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": review,
        "warnings": warnings
    })))
}
