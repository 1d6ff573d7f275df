use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

lazy_static! {
    /// Digits with at most one decimal point (no sign, no exponent)
    static ref AMOUNT_INPUT_REGEX: Regex =
        Regex::new(r"^\d*\.?\d*$").expect("Invalid regex pattern");
}

/// Whether `input` is an acceptable partial amount while the user is typing:
/// digits with at most one decimal point, or nothing at all.
pub fn is_valid_amount_input(input: &str) -> bool {
    AMOUNT_INPUT_REGEX.is_match(input)
}

/// Parse a user-entered amount. Empty input and a lone "." are zero.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if !is_valid_amount_input(trimmed) {
        return Err(
            ValidationError::InvalidInput(format!("'{}' is not a valid amount", input)).into(),
        );
    }
    if trimmed.is_empty() || trimmed == "." {
        return Ok(Decimal::ZERO);
    }

    let mut normalised = String::with_capacity(trimmed.len() + 2);
    if trimmed.starts_with('.') {
        normalised.push('0');
    }
    normalised.push_str(trimmed);
    if trimmed.ends_with('.') {
        normalised.push('0');
    }

    Ok(Decimal::from_str(&normalised)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_partial_inputs() {
        for input in ["", "1", "12.", ".5", "0.25", "100"] {
            assert!(is_valid_amount_input(input), "{:?} should be valid", input);
        }
        for input in ["-1", "1.2.3", "1e5", "abc", "1,000"] {
            assert!(!is_valid_amount_input(input), "{:?} should be invalid", input);
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount(".").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("12.").unwrap(), dec!(12));
        assert_eq!(parse_amount(".5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount(" 1234.5678 ").unwrap(), dec!(1234.5678));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("12a").is_err());
        assert!(parse_amount("-3").is_err());
    }
}
