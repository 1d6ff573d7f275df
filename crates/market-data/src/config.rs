use std::time::Duration;

use crate::provider::{exchange_rate_api, frankfurter};

/// How long a cached snapshot stays valid.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Minimum spacing between outbound live-rate requests.
pub const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Bounded timeout for a single provider request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for a [`RateClient`](crate::RateClient).
#[derive(Clone, Debug, PartialEq)]
pub struct RateClientConfig {
    pub cache_ttl: Duration,
    pub min_request_interval: Duration,
    pub request_timeout: Duration,
    pub latest_base_url: String,
    pub historical_base_url: String,
    /// Seed for the synthetic history generator; random when `None`.
    pub fallback_seed: Option<u64>,
}

impl Default for RateClientConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            min_request_interval: DEFAULT_MIN_REQUEST_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            latest_base_url: exchange_rate_api::DEFAULT_BASE_URL.to_string(),
            historical_base_url: frankfurter::DEFAULT_BASE_URL.to_string(),
            fallback_seed: None,
        }
    }
}

impl RateClientConfig {
    /// Read overrides from `RATEWISE_*` environment variables (and `.env`).
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        Self {
            cache_ttl: millis("RATEWISE_CACHE_TTL_MS", defaults.cache_ttl),
            min_request_interval: millis(
                "RATEWISE_MIN_REQUEST_INTERVAL_MS",
                defaults.min_request_interval,
            ),
            request_timeout: millis("RATEWISE_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            latest_base_url: lookup("RATEWISE_LATEST_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.latest_base_url),
            historical_base_url: lookup("RATEWISE_HISTORICAL_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.historical_base_url),
            fallback_seed: lookup("RATEWISE_FALLBACK_SEED").and_then(|v| v.trim().parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = RateClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, RateClientConfig::default());
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = RateClientConfig::from_lookup(lookup_from(&[
            ("RATEWISE_CACHE_TTL_MS", "60000"),
            ("RATEWISE_MIN_REQUEST_INTERVAL_MS", "250"),
            ("RATEWISE_LATEST_URL", "http://localhost:8080"),
            ("RATEWISE_FALLBACK_SEED", "42"),
        ]));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.min_request_interval, Duration::from_millis(250));
        assert_eq!(config.latest_base_url, "http://localhost:8080");
        assert_eq!(config.fallback_seed, Some(42));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = RateClientConfig::from_lookup(lookup_from(&[
            ("RATEWISE_REQUEST_TIMEOUT_MS", "soon"),
            ("RATEWISE_HISTORICAL_URL", "  "),
        ]));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.historical_base_url, frankfurter::DEFAULT_BASE_URL);
    }
}
