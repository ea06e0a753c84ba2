//! Liveness HTTP Routes

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Plaintext acknowledgment served at `/`
pub const INDEX_MESSAGE: &str = "TMS API is running!";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness routes: `/` and `/health`
pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
}

async fn index_handler() -> &'static str {
    INDEX_MESSAGE
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
