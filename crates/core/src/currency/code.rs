//! Supported currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ISO 4217 currency codes supported by the rate table.
///
/// Variant order matches the rate table layout, so ordered collections
/// keyed by `Currency` iterate bases and targets the way the table is
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Indian Rupee
    Inr,
    /// Canadian Dollar
    Cad,
}

impl Currency {
    /// All supported currencies, in rate table order.
    pub const ALL: [Self; 6] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Inr,
        Self::Cad,
    ];

    /// Returns the uppercase ISO 4217 code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Inr => "INR",
            Self::Cad => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported currency code.
///
/// Carries the uppercased input so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Parses case-insensitively; the wire format accepts `usd` and `USD` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_ascii_uppercase();
        match code.as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "INR" => Ok(Self::Inr),
            "CAD" => Ok(Self::Cad),
            _ => Err(UnknownCurrency(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("eUr".parse::<Currency>().unwrap(), Currency::Eur);
    }

    #[test]
    fn rejects_unknown_codes_with_uppercased_input() {
        assert_eq!(
            "xyz".parse::<Currency>().unwrap_err(),
            UnknownCurrency("XYZ".to_string())
        );
    }

    #[test]
    fn displays_as_uppercase_code() {
        assert_eq!(Currency::Jpy.to_string(), "JPY");
        assert_eq!(Currency::Cad.as_str(), "CAD");
    }

    #[test]
    fn ordering_follows_table_layout() {
        let mut sorted = Currency::ALL;
        sorted.sort();
        assert_eq!(sorted, Currency::ALL);
    }
}
