//! Localized conversion helpers shared by the calculators, the report
//! renderers and the API layer.
//!
//! Everything user-facing in this system is Brazilian-Portuguese formatted:
//! currency as "R$ 1.234,56", decimals with a comma, dates as DD/MM/YYYY.
//! These helpers are the single place that convention lives.

pub mod converters;

pub use converters::{
    format_currency, format_date_br, format_decimal_br, format_integer_br, parse_count,
    parse_currency, parse_iso_date, parse_number,
};
