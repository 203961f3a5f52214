//! Property-based tests for the conversion routine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Amount, Currency, RateTable, convert};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate distinct currency pairs from the table.
fn currency_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (0usize..6, 0usize..6)
        .prop_filter("self pairs have no direct rate", |(from, to)| from != to)
        .prop_map(|(from, to)| (Currency::ALL[from], Currency::ALL[to]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The converted amount always has at most 4 decimal places.
    #[test]
    fn prop_converted_amount_has_at_most_4_decimals(
        amount in positive_amount(),
        (from, to) in currency_pair(),
    ) {
        let table = RateTable::new();
        let result = convert(&table, from.as_str(), to.as_str(), &Amount::Text(amount.to_string()))
            .expect("table pairs always convert");

        let scaled = result.converted_amount * Decimal::from(10000);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "converted amount {} should have at most 4 decimal places",
            result.converted_amount
        );
    }

    /// Conversion is deterministic for identical inputs.
    #[test]
    fn prop_conversion_is_deterministic(
        amount in positive_amount(),
        (from, to) in currency_pair(),
    ) {
        let table = RateTable::new();
        let amount = Amount::Text(amount.to_string());

        let first = convert(&table, from.as_str(), to.as_str(), &amount).unwrap();
        let second = convert(&table, from.as_str(), to.as_str(), &amount).unwrap();

        prop_assert_eq!(first, second);
    }

    /// The converted amount matches the direct table lookup.
    #[test]
    fn prop_converted_amount_matches_table_rate(
        amount in positive_amount(),
        (from, to) in currency_pair(),
    ) {
        let table = RateTable::new();
        let result = convert(&table, from.as_str(), to.as_str(), &Amount::Text(amount.to_string()))
            .unwrap();

        let rate = table.rate(from, to).unwrap();
        prop_assert_eq!(result.exchange_rate, rate);
        prop_assert_eq!(
            result.converted_amount,
            (amount * rate).round_dp_with_strategy(
                4,
                rust_decimal::RoundingStrategy::MidpointNearestEven
            )
        );
    }

    /// Positive inputs always produce a positive converted amount.
    #[test]
    fn prop_positive_inputs_positive_output(
        amount in positive_amount(),
        (from, to) in currency_pair(),
    ) {
        let table = RateTable::new();
        let result = convert(&table, from.as_str(), to.as_str(), &Amount::Text(amount.to_string()))
            .unwrap();

        prop_assert!(result.converted_amount > Decimal::ZERO);
    }

    /// Lowercase codes behave exactly like uppercase ones.
    #[test]
    fn prop_codes_are_case_insensitive(
        amount in positive_amount(),
        (from, to) in currency_pair(),
    ) {
        let table = RateTable::new();
        let amount = Amount::Text(amount.to_string());

        let upper = convert(&table, from.as_str(), to.as_str(), &amount).unwrap();
        let lower = convert(
            &table,
            &from.as_str().to_ascii_lowercase(),
            &to.as_str().to_ascii_lowercase(),
            &amount,
        )
        .unwrap();

        prop_assert_eq!(upper, lower);
    }
}
