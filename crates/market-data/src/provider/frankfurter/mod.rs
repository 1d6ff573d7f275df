//! Frankfurter provider (European Central Bank reference rates).
//!
//! - Latest rates via `GET /latest?from={BASE}`
//! - Daily time series via `GET /{start}..{end}?from={BASE}&to={TARGET}`
//!
//! Frankfurter only covers the ~30 currencies the ECB publishes. Requests for
//! any other currency are rejected with a 4xx status. The rate client treats
//! 400 and 422 as "pair unsupported"; any other status, 404 included, is
//! returned to the caller.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::models::CurrencyCode;
use crate::provider::http::{build_client, get_json};
use crate::provider::{LatestRates, ProviderCapabilities, RateProvider, TimeSeries};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Provider ID constant
const PROVIDER_ID: &str = "FRANKFURTER";

/// Frankfurter provider for ECB reference rates.
pub struct FrankfurterProvider {
    client: Client,
    base_url: String,
}

impl FrankfurterProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn time_series_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/{}..{}",
            self.base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        )
    }
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_latest: true,
            supports_historical: true,
        }
    }

    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<LatestRates, MarketDataError> {
        let url = format!("{}/latest", self.base_url);
        get_json(&self.client, PROVIDER_ID, &url, &[("from", base.as_str())]).await
    }

    async fn fetch_time_series(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, MarketDataError> {
        let url = self.time_series_url(start, end);
        get_json(
            &self.client,
            PROVIDER_ID,
            &url,
            &[("from", base.as_str()), ("to", target.as_str())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_series_url() {
        let provider = FrankfurterProvider::new("https://example.test", Duration::from_secs(1));
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            provider.time_series_url(start, end),
            "https://example.test/2024-01-31..2024-03-01"
        );
    }

    #[test]
    fn test_provider_capabilities() {
        let provider = FrankfurterProvider::new(DEFAULT_BASE_URL, Duration::from_secs(1));
        assert_eq!(provider.id(), "FRANKFURTER");
        let caps = provider.capabilities();
        assert!(caps.supports_latest);
        assert!(caps.supports_historical);
    }
}
