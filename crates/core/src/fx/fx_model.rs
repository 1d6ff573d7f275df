use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY};

/// Decimal places a converted amount is shown with.
pub const CONVERTED_AMOUNT_DECIMALS: u32 = 4;

/// An ordered from/to currency selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub from_currency: String,
    pub to_currency: String,
}

impl CurrencyPair {
    pub fn new(from_currency: impl Into<String>, to_currency: impl Into<String>) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
        }
    }

    /// The same pair with direction reversed.
    pub fn swapped(&self) -> Self {
        Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.from_currency.eq_ignore_ascii_case(&self.to_currency)
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY)
    }
}

/// Result of converting an amount at the latest rate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub pair: CurrencyPair,
    pub amount: Decimal,
    /// Units of `to_currency` per one `from_currency`
    pub rate: Decimal,
    /// `amount * rate`, rounded to [`CONVERTED_AMOUNT_DECIMALS`]
    pub converted: Decimal,
    pub as_of_date: NaiveDate,
    pub retrieved_at_epoch_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped_reverses_direction() {
        let pair = CurrencyPair::new("USD", "EUR");
        assert_eq!(pair.swapped(), CurrencyPair::new("EUR", "USD"));
        assert_eq!(pair.swapped().swapped(), pair);
    }

    #[test]
    fn test_default_pair_is_usd_to_eur() {
        assert_eq!(CurrencyPair::default(), CurrencyPair::new("USD", "EUR"));
    }

    #[test]
    fn test_identity_ignores_case() {
        assert!(CurrencyPair::new("usd", "USD").is_identity());
        assert!(!CurrencyPair::new("USD", "EUR").is_identity());
    }
}
