//! The static exchange rate table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::Currency;

/// Immutable mapping `base currency -> (target currency -> rate)`.
///
/// Built once at startup and read-only for the process lifetime. Every
/// base maps to exactly the other five currencies; there are no
/// self-entries. Opposite directions are quoted independently, so the
/// table is deliberately not reciprocal-consistent (USD->EUR is 0.85
/// while EUR->USD is 1.18, not 1/0.85).
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<Currency, BTreeMap<Currency, Decimal>>,
}

impl RateTable {
    /// Builds the table with the fixed mock rates.
    #[must_use]
    pub fn new() -> Self {
        use Currency::{Cad, Eur, Gbp, Inr, Jpy, Usd};

        let rows = [
            (Usd, [
                (Eur, dec!(0.85)),
                (Gbp, dec!(0.73)),
                (Jpy, dec!(110.0)),
                (Inr, dec!(74.5)),
                (Cad, dec!(1.25)),
            ]),
            (Eur, [
                (Usd, dec!(1.18)),
                (Gbp, dec!(0.86)),
                (Jpy, dec!(129.5)),
                (Inr, dec!(87.8)),
                (Cad, dec!(1.47)),
            ]),
            (Gbp, [
                (Usd, dec!(1.37)),
                (Eur, dec!(1.16)),
                (Jpy, dec!(150.8)),
                (Inr, dec!(102.1)),
                (Cad, dec!(1.71)),
            ]),
            (Jpy, [
                (Usd, dec!(0.0091)),
                (Eur, dec!(0.0077)),
                (Gbp, dec!(0.0066)),
                (Inr, dec!(0.68)),
                (Cad, dec!(0.011)),
            ]),
            (Inr, [
                (Usd, dec!(0.013)),
                (Eur, dec!(0.011)),
                (Gbp, dec!(0.0098)),
                (Jpy, dec!(1.47)),
                (Cad, dec!(0.017)),
            ]),
            (Cad, [
                (Usd, dec!(0.80)),
                (Eur, dec!(0.68)),
                (Gbp, dec!(0.58)),
                (Jpy, dec!(88.0)),
                (Inr, dec!(59.6)),
            ]),
        ];

        let rates = rows
            .into_iter()
            .map(|(base, targets)| (base, targets.into_iter().collect()))
            .collect();

        Self { rates }
    }

    /// Looks up the direct rate for a currency pair.
    #[must_use]
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        self.rates
            .get(&from)
            .and_then(|targets| targets.get(&to))
            .copied()
    }

    /// Returns true if `currency` can be the `from` side of a conversion.
    #[must_use]
    pub fn is_base(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    /// Base currencies, in table order.
    #[must_use]
    pub fn base_currencies(&self) -> Vec<Currency> {
        self.rates.keys().copied().collect()
    }

    /// Currencies reachable from `from` with a single direct lookup.
    #[must_use]
    pub fn targets(&self, from: Currency) -> Vec<Currency> {
        self.rates
            .get(&from)
            .map(|targets| targets.keys().copied().collect())
            .unwrap_or_default()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}
