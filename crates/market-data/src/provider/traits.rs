//! Rate provider trait definitions.
//!
//! This module defines the core `RateProvider` trait that every exchange rate
//! source implements. The rate client holds providers as trait objects, which
//! lets tests substitute in-memory fakes for the HTTP providers.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::CurrencyCode;

use super::capabilities::ProviderCapabilities;
use super::payloads::{LatestRates, TimeSeries};

/// Trait for exchange rate providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ratewise_market_data::provider::{LatestRates, ProviderCapabilities, RateProvider};
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl RateProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities {
///             supports_latest: true,
///             supports_historical: false,
///         }
///     }
///
///     async fn fetch_latest(&self, base: &CurrencyCode) -> Result<LatestRates, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in errors and logs.
    fn id(&self) -> &'static str;

    /// Describes which request flows this provider serves.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Fetch the latest rates quoted against `base`.
    ///
    /// Implementations return the raw body; filtering, validation and caching
    /// are the client's job.
    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<LatestRates, MarketDataError>;

    /// Fetch daily rates for `base` → `target` over the inclusive range
    /// `[start, end]`.
    ///
    /// A provider that does not know the pair answers with
    /// [`MarketDataError::HttpStatus`] 400 or 422.
    /// Default implementation returns `NotSupported`.
    async fn fetch_time_series(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, MarketDataError> {
        let _ = (base, target, start, end);
        Err(MarketDataError::NotSupported {
            operation: "time_series".to_string(),
            provider: self.id().to_string(),
        })
    }
}
