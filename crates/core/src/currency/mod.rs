//! Currency codes, the static rate table, and conversion logic.

pub mod code;
pub mod convert;
pub mod table;

pub use code::Currency;
pub use convert::{Amount, Conversion, ConversionError, convert};
pub use table::RateTable;

#[cfg(test)]
mod props;
