//! Health check endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;
use crate::routes::response::timestamp;

/// Service identifier reported by the health endpoint.
const SERVICE_NAME: &str = "currency-converter";

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Response time, ISO-8601 UTC.
    pub timestamp: String,
    /// Fixed service identifier.
    pub service: &'static str,
}

/// GET `/health` - Liveness check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp(),
        service: SERVICE_NAME,
    })
}

/// Creates the health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
