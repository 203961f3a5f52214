//! The shared conversion routine and its error type.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use super::code::UnknownCurrency;
use super::{Currency, RateTable};

/// Errors a conversion request can fail with.
///
/// The display string is the `error` field of the HTTP response body,
/// so the messages are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Amount non-numeric or not positive.
    #[error("Invalid amount. Please provide a positive number.")]
    InvalidAmount,

    /// Body request with one or more required fields absent.
    #[error("Missing required fields: from, to, amount")]
    MissingFields,

    /// `from` is not a base currency of the rate table.
    #[error("Unsupported currency: {code}")]
    UnsupportedCurrency {
        /// The uppercased code that was requested.
        code: String,
        /// All base currencies the table supports.
        supported: Vec<Currency>,
    },

    /// `to` is not reachable from `from` with a direct lookup.
    #[error("Conversion from {from} to {to} not available")]
    UnavailableConversion {
        /// The base currency of the request.
        from: Currency,
        /// The uppercased target code that was requested.
        to: String,
        /// Currencies reachable from `from`.
        available: Vec<Currency>,
    },
}

/// A conversion amount as it arrives on the wire.
///
/// Path segments always carry the amount as text; the JSON body accepts
/// a number or a numeric string.
#[derive(Debug, Clone)]
pub enum Amount {
    /// Plain JSON number.
    Number(f64),
    /// Numeric string, e.g. `"100"` or `"99.95"`.
    Text(String),
}

impl Amount {
    /// Parses the amount into a decimal, `None` if it is not numeric.
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => Decimal::try_from(*number).ok(),
            Self::Text(text) => {
                let text = text.trim();
                // Plain decimal notation first; from_str has no exponent support.
                text.parse()
                    .ok()
                    .or_else(|| Decimal::from_scientific(text).ok())
            }
        }
    }
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Base currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// The requested amount, as parsed.
    pub original_amount: Decimal,
    /// `original_amount * exchange_rate`, rounded to 4 decimal places.
    pub converted_amount: Decimal,
    /// The direct rate used.
    pub exchange_rate: Decimal,
}

/// Converts `amount` between two currencies over `table`.
///
/// Validation short-circuits in a fixed order: the amount first, then
/// the base currency, then the target pair. Currency codes are matched
/// case-insensitively. Rounds half to even to 4 decimal places. An
/// amount so large the multiplication overflows is rejected as invalid
/// rather than panicking.
pub fn convert(
    table: &RateTable,
    from: &str,
    to: &str,
    amount: &Amount,
) -> Result<Conversion, ConversionError> {
    let original_amount = amount
        .to_decimal()
        .filter(|parsed| *parsed > Decimal::ZERO)
        .ok_or(ConversionError::InvalidAmount)?;

    let from = match from.parse::<Currency>() {
        Ok(code) if table.is_base(code) => code,
        Ok(code) => {
            return Err(ConversionError::UnsupportedCurrency {
                code: code.to_string(),
                supported: table.base_currencies(),
            });
        }
        Err(UnknownCurrency(code)) => {
            return Err(ConversionError::UnsupportedCurrency {
                code,
                supported: table.base_currencies(),
            });
        }
    };

    let target = to
        .parse::<Currency>()
        .ok()
        .and_then(|target| table.rate(from, target).map(|rate| (target, rate)));

    let Some((to, rate)) = target else {
        return Err(ConversionError::UnavailableConversion {
            from,
            to: to.to_ascii_uppercase(),
            available: table.targets(from),
        });
    };

    let converted_amount = original_amount
        .checked_mul(rate)
        .ok_or(ConversionError::InvalidAmount)?
        .round_dp_with_strategy(4, RoundingStrategy::MidpointNearestEven);

    Ok(Conversion {
        from,
        to,
        original_amount,
        converted_amount,
        exchange_rate: rate,
    })
}
