// src/handler/contractors.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{contractordb::ContractorExt, reviewdb::ReviewExt},
    dtos::contractordtos::{ContractorQueryDto, CreateContractorDto},
    error::HttpError,
    AppState,
};

pub fn contractor_handler() -> Router {
    Router::new()
        .route("/", get(list_contractors).post(create_contractor))
        .route("/:contractor_id", get(get_contractor))
        .route("/:contractor_id/reviews", get(get_contractor_reviews))
}

pub async fn list_contractors(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<ContractorQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let service = params
        .service
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let contractors = app_state
        .db_client
        .get_contractors(service)
        .await
        .map_err(|e| {
            tracing::error!("failed to list contractors: {}", e);
            HttpError::server_error("Internal server error")
        })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": contractors
    })))
}

pub async fn get_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(contractor_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let contractor = app_state
        .db_client
        .get_contractor(contractor_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch contractor {}: {}", contractor_id, e);
            HttpError::server_error("Internal server error")
        })?
        .ok_or_else(|| HttpError::not_found("Contractor not found"))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": contractor
    })))
}

pub async fn create_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateContractorDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let contractor = app_state
        .db_client
        .save_contractor(
            body.name.trim().to_string(),
            body.service.trim().to_string(),
            body.location.trim().to_string(),
            body.price.trim().to_string(),
            body.description.map(|d| d.trim().to_string()),
            body.image,
        )
        .await
        .map_err(|e| {
            tracing::error!("failed to create contractor: {}", e);
            HttpError::server_error("Internal server error")
        })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": contractor
    })))
}

pub async fn get_contractor_reviews(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(contractor_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_contractor(contractor_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch contractor {}: {}", contractor_id, e);
            HttpError::server_error("Internal server error")
        })?
        .ok_or_else(|| HttpError::not_found("Contractor not found"))?;

    let reviews = app_state
        .db_client
        .get_contractor_reviews(contractor_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to list reviews for {}: {}", contractor_id, e);
            HttpError::server_error("Internal server error")
        })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": reviews
    })))
}
