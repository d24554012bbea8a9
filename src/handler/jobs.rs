// src/handler/jobs.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use validator::Validate;

use crate::{
    db::jobdb::JobExt,
    dtos::jobdtos::CreateJobDto,
    error::HttpError,
    models::jobmodel::JobUrgency,
    AppState,
};

pub fn job_handler() -> Router {
    Router::new().route("/", get(list_jobs).post(create_job))
}

pub async fn list_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let jobs = app_state.db_client.get_jobs().await.map_err(|e| {
        tracing::error!("failed to list jobs: {}", e);
        HttpError::server_error("Internal server error")
    })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": jobs
    })))
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let service = body
        .normalized_service()
        .ok_or_else(|| HttpError::bad_request("Either service or category is required"))?;

    let job = app_state
        .db_client
        .create_job(
            body.title.map(|t| t.trim().to_string()),
            service,
            body.description.trim().to_string(),
            body.location.trim().to_string(),
            body.urgency.unwrap_or(JobUrgency::Normal),
            body.budget.map(|b| b.trim().to_string()),
            body.user_id,
        )
        .await
        .map_err(|e| {
            tracing::error!("failed to create job: {}", e);
            HttpError::server_error("Internal server error")
        })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": job
    })))
}
