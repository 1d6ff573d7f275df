//! Error types for the market data crate.
//!
//! This module provides [`MarketDataError`], the single error enum surfaced by
//! every rate client operation. Nothing in this crate retries on its own;
//! [`MarketDataError::is_transient`] lets callers decide whether a later
//! re-attempt is worth making.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// The bounded request timeout elapsed before the provider answered.
    #[error("Request timed out: {provider}. Please check your internet connection and try again.")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The transport failed (DNS, connection refused, TLS, ...).
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider being contacted
        provider: String,
        /// The transport error message
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("API request failed with status {status}: {provider}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response carried no usable rates, or none of the requested symbols.
    #[error("No exchange rates found: {0}")]
    NoRates(String),

    /// The body could not be decoded.
    #[error("Failed to parse response: {provider} - {message}")]
    Parse {
        /// The provider whose body failed to parse
        provider: String,
        /// The decoder error message
        message: String,
    },

    /// A currency code was not three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// An argument was out of range (e.g. a zero-day history horizon).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A newer live-rate request replaced this one before it completed.
    #[error("Request superseded by a newer request")]
    Superseded,

    /// The provider does not implement the requested operation.
    #[error("Operation '{operation}' not supported by {provider}")]
    NotSupported {
        /// The operation that was attempted
        operation: String,
        /// The provider that lacks it
        provider: String,
    },
}

impl MarketDataError {
    /// Returns `true` when the same request may succeed if issued again later.
    ///
    /// Timeouts, transport failures, rate limiting (429) and server errors (5xx)
    /// are transient. Bad input, missing rates and client errors are not.
    /// A superseded request is not transient: its replacement is already running.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratewise_market_data::errors::MarketDataError;
    ///
    /// let error = MarketDataError::Timeout { provider: "FRANKFURTER".to_string() };
    /// assert!(error.is_transient());
    ///
    /// let error = MarketDataError::NoRates("XXX".to_string());
    /// assert!(!error.is_transient());
    /// ```
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::NoRates(_)
            | Self::Parse { .. }
            | Self::InvalidCurrency(_)
            | Self::InvalidArgument(_)
            | Self::Superseded
            | Self::NotSupported { .. } => false,
        }
    }

    /// Returns `true` for the client-error statuses a provider uses to reject
    /// a currency pair it does not cover.
    pub fn is_unsupported_pair(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 400 | 422, .. })
    }
}
