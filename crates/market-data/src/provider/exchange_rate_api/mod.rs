//! ExchangeRate-API provider for latest exchange rates.
//!
//! Uses the keyless v4 endpoint `GET /v4/latest/{BASE}`, which returns every
//! currency the service knows quoted against the base. The free endpoint has
//! no historical data.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::models::CurrencyCode;
use crate::provider::http::{build_client, get_json};
use crate::provider::{LatestRates, ProviderCapabilities, RateProvider};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com";

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// ExchangeRate-API provider.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use ratewise_market_data::ExchangeRateApiProvider;
///
/// let provider = ExchangeRateApiProvider::new(
///     "https://api.exchangerate-api.com",
///     Duration::from_secs(10),
/// );
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn latest_url(&self, base: &CurrencyCode) -> String {
        format!("{}/v4/latest/{}", self.base_url, base)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_latest: true,
            supports_historical: false,
        }
    }

    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<LatestRates, MarketDataError> {
        get_json(&self.client, PROVIDER_ID, &self.latest_url(base), &[]).await
    }
}
