//! Parsing and formatting of localized user input and output.
//!
//! Parsing is deliberately forgiving: form fields arrive as free text and an
//! unusable value coerces to zero rather than failing the request. Formatting
//! goes through rusty-money for currency and small helpers for plain numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rusty_money::{Money, iso};
use std::str::FromStr;

/// Parses a localized currency string ("R$ 1.234,56") into a `Decimal`.
///
/// Strips the symbol, whitespace and thousands separators, converts the
/// decimal comma. Empty or invalid input parses to zero.
pub fn parse_currency(raw: &str) -> Decimal {
    let cleaned: String = raw
        .replace("R$", "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    Decimal::from_str(&cleaned.replace(',', ".")).unwrap_or_default()
}

/// Parses a plain localized number ("4,345" or "30"). Empty or invalid input
/// parses to zero.
pub fn parse_number(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim().replace(',', ".").as_str()).unwrap_or_default()
}

/// Parses an integer count field, truncating any fractional part the user
/// typed. Empty, invalid or negative input parses to zero.
pub fn parse_count(raw: &str) -> u32 {
    parse_number(raw).trunc().to_u32().unwrap_or(0)
}

/// Parses an ISO `YYYY-MM-DD` date field.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Formats a monetary amount as BRL ("R$1.234,56").
pub fn format_currency(amount: Decimal) -> String {
    Money::from_decimal(amount.round_dp(2), iso::BRL).to_string()
}

/// Formats a plain decimal with a comma separator and fixed precision
/// ("173,8" for hours, "43,48" for percentages).
pub fn format_decimal_br(value: Decimal, decimal_places: u32) -> String {
    format!("{:.1$}", value.round_dp(decimal_places), decimal_places as usize).replace('.', ",")
}

/// Formats an integer with dot thousands grouping ("1.000.000").
pub fn format_integer_br(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a date as DD/MM/YYYY.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_localized() {
        assert_eq!(parse_currency("R$ 1.234,56"), Decimal::new(123456, 2));
        assert_eq!(parse_currency("R$1.234,56"), Decimal::new(123456, 2));
        assert_eq!(parse_currency("1234,56"), Decimal::new(123456, 2));
        assert_eq!(parse_currency("1.000"), Decimal::new(1000, 0));
    }

    #[test]
    fn test_parse_currency_invalid_is_zero() {
        assert_eq!(parse_currency(""), Decimal::ZERO);
        assert_eq!(parse_currency("abc"), Decimal::ZERO);
        assert_eq!(parse_currency("R$ "), Decimal::ZERO);
    }

    #[test]
    fn test_parse_number_comma_and_dot() {
        assert_eq!(parse_number("4,345"), Decimal::new(4345, 3));
        assert_eq!(parse_number(" 30 "), Decimal::new(30, 0));
        assert_eq!(parse_number("x"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_count_truncates() {
        assert_eq!(parse_count("4"), 4);
        assert_eq!(parse_count("3,9"), 3);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-2"), 0);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2026-01-15"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
        assert_eq!(parse_iso_date("15/01/2026"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_format_currency_brl() {
        assert_eq!(format_currency(Decimal::new(123456, 2)), "R$1.234,56");
        assert_eq!(format_currency(Decimal::ZERO), "R$0,00");
    }

    #[test]
    fn test_format_decimal_br() {
        assert_eq!(format_decimal_br(Decimal::new(1738, 1), 1), "173,8");
        assert_eq!(format_decimal_br(Decimal::new(10, 0), 2), "10,00");
    }

    #[test]
    fn test_format_integer_br() {
        assert_eq!(format_integer_br(1_000_000), "1.000.000");
        assert_eq!(format_integer_br(999), "999");
        assert_eq!(format_integer_br(1_000), "1.000");
    }

    #[test]
    fn test_format_date_br() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date_br(date), "07/03/2026");
    }
}
