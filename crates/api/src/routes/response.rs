//! Response helpers shared by the route modules.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use converter_core::ConversionError;

/// Current time in the ISO-8601 format the wire contract uses
/// (UTC, millisecond precision, `Z` suffix).
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A 400 response whose body carries only `error` and `timestamp`.
///
/// Used where a request fails before reaching the conversion routine,
/// so even malformed bodies get a JSON error in the contract shape.
pub(crate) fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": message,
            "timestamp": timestamp(),
        })),
    )
        .into_response()
}

/// Maps a conversion error to its HTTP 400 response.
///
/// Every body carries `error` and `timestamp`; the currency variants
/// add their list of valid codes.
pub(crate) fn error_response(error: &ConversionError) -> Response {
    let mut body = json!({
        "error": error.to_string(),
        "timestamp": timestamp(),
    });

    match error {
        ConversionError::UnsupportedCurrency { supported, .. } => {
            body["supported_currencies"] = json!(supported);
        }
        ConversionError::UnavailableConversion { available, .. } => {
            body["available_conversions"] = json!(available);
        }
        ConversionError::InvalidAmount | ConversionError::MissingFields => {}
    }

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
