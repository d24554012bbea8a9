// src/handler/assistant.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::post, Extension, Json, Router};
use validator::Validate;

use crate::{
    dtos::assistantdtos::{ChatDto, GenerateDescriptionDto},
    error::HttpError,
    AppState,
};

pub fn assistant_handler() -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/generate-desc", post(generate_description))
}

pub async fn chat(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<ChatDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let reply = app_state
        .assistant_service
        .chat(body.message.trim())
        .await?;

    Ok(Json(serde_json::json!({ "reply": reply })))
}

pub async fn generate_description(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<GenerateDescriptionDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let description = app_state
        .assistant_service
        .generate_description(
            body.service.trim(),
            body.location.trim(),
            body.title.as_deref().map(str::trim),
        )
        .await?;

    Ok(Json(serde_json::json!({ "description": description })))
}
