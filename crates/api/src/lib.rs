//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for health, rates, and conversion
//! - The shared application state

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use converter_core::RateTable;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The static exchange rate table, read-only after startup.
    pub rates: Arc<RateTable>,
}

impl AppState {
    /// Creates state over a freshly built rate table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rates: Arc::new(RateTable::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
