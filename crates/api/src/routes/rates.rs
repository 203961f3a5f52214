//! Rate table listing endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use converter_core::{Currency, RateTable};

use crate::AppState;
use crate::routes::response::timestamp;

/// Response for the full rate table.
#[derive(Serialize)]
pub struct RatesResponse {
    /// The full table, bases in table order.
    pub rates: RateTable,
    /// Response time, ISO-8601 UTC.
    pub timestamp: String,
    /// Base currency keys, in table order.
    pub base_currencies: Vec<Currency>,
}

/// GET `/rates` - List all exchange rates.
async fn list_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    Json(RatesResponse {
        rates: (*state.rates).clone(),
        timestamp: timestamp(),
        base_currencies: state.rates.base_currencies(),
    })
}

/// Creates the rates routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/rates", get(list_rates))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{AppState, create_router};

    #[tokio::test]
    async fn rates_returns_the_full_table() {
        let app = create_router(AppState::new());
        let response = app
            .oneshot(Request::get("/rates").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body["base_currencies"],
            json!(["USD", "EUR", "GBP", "JPY", "INR", "CAD"])
        );
        assert_eq!(body["rates"].as_object().unwrap().len(), 6);
        assert_eq!(body["rates"]["USD"].as_object().unwrap().len(), 5);
        assert_eq!(body["rates"]["USD"]["EUR"], json!(0.85));
        assert_eq!(body["rates"]["EUR"]["USD"], json!(1.18));
        assert!(body["timestamp"].is_string());
    }
}
