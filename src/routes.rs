// routes.rs
use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        assistant::assistant_handler, bookings::booking_handler,
        contractors::contractor_handler, disputes::dispute_handler, jobs::job_handler,
        reviews::review_handler,
    },
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/contractors", contractor_handler())
        .nest("/bookings", booking_handler())
        .nest("/disputes", dispute_handler())
        .nest("/jobs", job_handler())
        .nest("/reviews", review_handler())
        .nest("/gemini", assistant_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
