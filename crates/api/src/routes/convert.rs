//! Currency conversion endpoints.
//!
//! Two entry points share one validation routine: a path variant where
//! the amount arrives as a string, and a JSON body variant where the
//! amount may be a number or a string.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use converter_core::{Amount, Conversion, ConversionError, Currency, convert};

use crate::AppState;
use crate::routes::response::{bad_request, error_response, timestamp};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert/{from}/{to}/{amount}", get(convert_by_path))
        .route("/convert", post(convert_by_body))
}

/// Request body for POST `/convert`.
///
/// Fields are optional so an absent field surfaces as the dedicated
/// missing-fields error rather than a deserialization rejection. The
/// amount is kept as raw JSON: an explicit `null` or a non-numeric
/// value is present-but-invalid, not missing.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Base currency code.
    #[serde(default)]
    pub from: Option<String>,
    /// Target currency code.
    #[serde(default)]
    pub to: Option<String>,
    /// Amount to convert, number or numeric string.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub amount: Option<Value>,
}

/// Deserializes a field that is present, keeping an explicit `null`
/// distinct from an absent field.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Interprets a raw JSON amount; `None` for shapes that can never be
/// numeric (null, booleans, arrays, objects).
fn amount_from_json(value: &Value) -> Option<Amount> {
    match value {
        Value::Number(number) => number.as_f64().map(Amount::Number),
        Value::String(text) => Some(Amount::Text(text.clone())),
        _ => None,
    }
}

/// Response for a successful conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Base currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
    /// The requested amount, as parsed.
    pub original_amount: Decimal,
    /// Converted amount, rounded to 4 decimal places.
    pub converted_amount: Decimal,
    /// The direct rate used.
    pub exchange_rate: Decimal,
    /// Response time, ISO-8601 UTC.
    pub timestamp: String,
}

impl From<Conversion> for ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            from: conversion.from,
            to: conversion.to,
            original_amount: conversion.original_amount,
            converted_amount: conversion.converted_amount,
            exchange_rate: conversion.exchange_rate,
            timestamp: timestamp(),
        }
    }
}

/// GET `/convert/{from}/{to}/{amount}` - Convert via path parameters.
async fn convert_by_path(
    State(state): State<AppState>,
    Path((from, to, amount)): Path<(String, String, String)>,
) -> Response {
    respond(convert(&state.rates, &from, &to, &Amount::Text(amount)))
}

/// POST `/convert` - Convert via JSON body.
async fn convert_by_body(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    // Keep rejections inside the contract: every failure is JSON with
    // `error` and `timestamp`, never a plain-text 422.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!(error = %rejection, "malformed conversion body");
            return bad_request(&rejection.body_text());
        }
    };

    let (Some(from), Some(to), Some(amount)) = (payload.from, payload.to, payload.amount) else {
        return error_response(&ConversionError::MissingFields);
    };

    let Some(amount) = amount_from_json(&amount) else {
        return error_response(&ConversionError::InvalidAmount);
    };

    respond(convert(&state.rates, &from, &to, &amount))
}

fn respond(result: Result<Conversion, ConversionError>) -> Response {
    match result {
        Ok(conversion) => (StatusCode::OK, Json(ConvertResponse::from(conversion))).into_response(),
        Err(error) => {
            debug!(error = %error, "conversion request rejected");
            error_response(&error)
        }
    }
}
