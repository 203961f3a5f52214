//! Core business logic for the currency converter.
//!
//! This crate contains pure conversion logic with ZERO web dependencies.
//! All domain types, the static rate table, and validation rules live here.
//!
//! # Modules
//!
//! - `currency` - Currency codes, the rate table, and the conversion routine

pub mod currency;

pub use currency::{Amount, Conversion, ConversionError, Currency, RateTable, convert};
