//! Core error types for the Ratewise application.
//!
//! Rate client failures are wrapped as-is so callers can still inspect the
//! underlying [`MarketDataError`]; everything else is reported with a plain
//! message suitable for showing to the user.

use thiserror::Error;

use ratewise_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the converter application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch exchange rates: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Failed to convert between currencies: {0}")]
    CurrencyConversionFailed(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Failed to serialize settings: {0}")]
    Serialization(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_data_error_is_wrapped() {
        let err: Error = MarketDataError::NoRates("requested currencies: XXX".to_string()).into();
        assert!(matches!(err, Error::MarketData(MarketDataError::NoRates(_))));
        assert_eq!(
            err.to_string(),
            "Failed to fetch exchange rates: No exchange rates found: requested currencies: XXX"
        );
    }

    #[test]
    fn test_io_error_maps_to_config_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::ConfigIO(_)));
        let message: String = err.into();
        assert_eq!(message, "Failed to load configuration: denied");
    }
}
