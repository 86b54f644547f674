//! Display currency for catalog prices.
//!
//! Prices are plain integer currency units everywhere in the store; the
//! currency is display metadata carried by the catalog, never an input to
//! arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreError;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Result<Self, StoreError> {
        match code.to_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            _ => Err(StoreError::UnknownCurrency(code.to_string())),
        }
    }

    /// Format an amount with the currency symbol and thousands grouping
    /// (e.g., `format(49999)` for INR yields "₹49,999").
    pub fn format(&self, amount: i64) -> String {
        format!("{}{}", self.symbol(), group_thousands(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Insert a comma every three digits, preserving a leading minus sign.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::INR.code(), "INR");
        assert_eq!(Currency::USD.symbol(), "$");
    }

    #[test]
    fn test_currency_from_code() {
        assert!(matches!(Currency::from_code("inr"), Ok(Currency::INR)));
        assert!(matches!(Currency::from_code("USD"), Ok(Currency::USD)));
        assert!(Currency::from_code("XYZ").is_err());
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(49999), "49,999");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format() {
        assert_eq!(Currency::INR.format(129999), "\u{20b9}129,999");
        assert_eq!(Currency::USD.format(999), "$999");
    }
}
