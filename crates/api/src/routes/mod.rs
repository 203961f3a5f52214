//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod convert;
pub mod health;
pub mod rates;

pub(crate) mod response;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(rates::routes())
        .merge(convert::routes())
}
