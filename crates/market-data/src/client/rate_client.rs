//! The rate client: cached, throttled access to live and historical rates.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use super::cache::{CacheKey, RateCache};
use super::cancel::{CancellationToken, RequestGate};
use super::fallback::synthesize_history;
use super::throttle::RequestThrottle;
use crate::config::RateClientConfig;
use crate::errors::MarketDataError;
use crate::models::{
    round_rate, CurrencyCode, HistoricalPoint, HistoricalSeries, RateSnapshot, SeriesOrigin,
};
use crate::provider::exchange_rate_api::ExchangeRateApiProvider;
use crate::provider::frankfurter::FrankfurterProvider;
use crate::provider::{LatestRates, RateProvider, TimeSeries};

/// History horizon used when the caller has no preference.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Longest history horizon accepted (thirty years of days).
pub const MAX_HISTORY_DAYS: u32 = 10950;

/// Cached, throttled client for exchange rates.
///
/// Construct one per session and share it (e.g. behind an `Arc`). The client
/// owns its cache, its throttle stamp and the handle of the in-flight live
/// request; nothing is global.
///
/// - [`get_rates`](Self::get_rates) serves latest rates from a TTL cache,
///   going to the network at most once per cooldown and cancelling any live
///   request it replaces.
/// - [`get_historical_rates`](Self::get_historical_rates) fetches a daily
///   series, falling back to a synthetic one when the provider rejects the
///   pair.
pub struct RateClient {
    config: RateClientConfig,
    latest: Arc<dyn RateProvider>,
    historical: Arc<dyn RateProvider>,
    cache: Mutex<RateCache>,
    throttle: RequestThrottle,
    gate: RequestGate,
    rng: Mutex<StdRng>,
}

impl RateClient {
    /// Create a client over the given providers.
    pub fn new(
        config: RateClientConfig,
        latest: Arc<dyn RateProvider>,
        historical: Arc<dyn RateProvider>,
    ) -> Self {
        let rng = match config.fallback_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            cache: Mutex::new(RateCache::new(config.cache_ttl)),
            throttle: RequestThrottle::new(config.min_request_interval),
            gate: RequestGate::new(),
            rng: Mutex::new(rng),
            latest,
            historical,
            config,
        }
    }

    /// Create a client wired to ExchangeRate-API (latest) and Frankfurter
    /// (history) at the configured URLs.
    pub fn from_config(config: RateClientConfig) -> Self {
        let latest = Arc::new(ExchangeRateApiProvider::new(
            config.latest_base_url.clone(),
            config.request_timeout,
        ));
        let historical = Arc::new(FrankfurterProvider::new(
            config.historical_base_url.clone(),
            config.request_timeout,
        ));
        Self::new(config, latest, historical)
    }

    pub fn config(&self) -> &RateClientConfig {
        &self.config
    }

    fn lock_cache(&self) -> MutexGuard<'_, RateCache> {
        self.cache.lock().unwrap_or_else(|poisoned| {
            warn!("Rate cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn lock_rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| {
            warn!("Fallback RNG mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Latest rates for `base`, optionally narrowed to `target_symbols`.
    ///
    /// Served from cache while the entry for `(base, sorted symbols)` is
    /// younger than the TTL. On a miss the call waits out the request
    /// cooldown, cancels any live request still in flight, and fetches.
    ///
    /// # Errors
    ///
    /// - `InvalidCurrency` for a malformed code
    /// - `Timeout`, `Network`, `HttpStatus`, `Parse` from the transport
    /// - `NoRates` when the body has no rates or none of the requested symbols
    /// - `Superseded` when a newer call replaced this one mid-flight
    pub async fn get_rates(
        &self,
        base: &str,
        target_symbols: Option<&[&str]>,
    ) -> Result<RateSnapshot, MarketDataError> {
        let base = CurrencyCode::parse(base)?;
        if !self.latest.capabilities().supports_latest {
            return Err(MarketDataError::NotSupported {
                operation: "latest".to_string(),
                provider: self.latest.id().to_string(),
            });
        }
        let symbols = target_symbols
            .map(|symbols| {
                symbols
                    .iter()
                    .map(|s| CurrencyCode::parse(s))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        let key = CacheKey::new(&base, symbols.as_deref());

        if let Some(entry) = self.lock_cache().get(&key) {
            debug!(
                "Rate cache hit for {} (stored at {} ms)",
                key, entry.stored_at_epoch_ms
            );
            return Ok(entry.snapshot);
        }

        self.throttle.wait().await;
        let token = self.gate.begin();
        let result = self.fetch_and_store(&key, &token).await;
        self.gate.finish(&token);

        if let Err(e) = &result {
            warn!("Exchange rate request for {} failed: {}", key, e);
        }
        result
    }

    async fn fetch_and_store(
        &self,
        key: &CacheKey,
        token: &CancellationToken,
    ) -> Result<RateSnapshot, MarketDataError> {
        let provider = self.latest.id();
        debug!("Fetching latest rates for {} from {}", key, provider);

        let request = tokio::time::timeout(
            self.config.request_timeout,
            self.latest.fetch_latest(key.base()),
        );
        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            outcome = request => Some(outcome),
        };

        let body = match outcome {
            None => return Err(MarketDataError::Superseded),
            Some(Err(_elapsed)) => {
                return Err(MarketDataError::Timeout {
                    provider: provider.to_string(),
                })
            }
            Some(Ok(result)) => result?,
        };

        let snapshot = build_snapshot(key, body)?;

        if token.is_cancelled() {
            return Err(MarketDataError::Superseded);
        }

        self.lock_cache().insert(key.clone(), snapshot.clone());
        Ok(snapshot)
    }

    /// Daily rates for `base` → `target` over the last `days` days, oldest
    /// first, at most `days` points. `days` must be in
    /// `1..=`[`MAX_HISTORY_DAYS`].
    ///
    /// When the historical provider rejects the pair (HTTP 400/422) the
    /// series is synthesized from the live rate instead and tagged
    /// [`SeriesOrigin::Synthetic`]. Callers displaying such a series should
    /// say it is illustrative.
    pub async fn get_historical_rates(
        &self,
        base: &str,
        target: &str,
        days: u32,
    ) -> Result<HistoricalSeries, MarketDataError> {
        if days == 0 || days > MAX_HISTORY_DAYS {
            return Err(MarketDataError::InvalidArgument(format!(
                "history horizon must be between 1 and {} days, got {}",
                MAX_HISTORY_DAYS, days
            )));
        }
        let base = CurrencyCode::parse(base)?;
        let target = CurrencyCode::parse(target)?;

        let provider = self.historical.id();
        if !self.historical.capabilities().supports_historical {
            return Err(MarketDataError::NotSupported {
                operation: "time_series".to_string(),
                provider: provider.to_string(),
            });
        }

        let end = Utc::now().date_naive();
        let start = end.checked_sub_days(Days::new(u64::from(days))).ok_or_else(|| {
            MarketDataError::InvalidArgument(format!("{} days before {} is out of range", days, end))
        })?;
        debug!(
            "Fetching {}/{} history {}..{} from {}",
            base, target, start, end, provider
        );

        let response = tokio::time::timeout(
            self.config.request_timeout,
            self.historical
                .fetch_time_series(&base, &target, start, end),
        )
        .await
        .unwrap_or_else(|_| {
            Err(MarketDataError::Timeout {
                provider: provider.to_string(),
            })
        });

        match response {
            Ok(series) => series_from_time_series(series, &target, days),
            Err(e) if e.is_unsupported_pair() => {
                self.synthesize_series(&base, &target, days, end).await
            }
            Err(e) => {
                warn!("Historical rate request for {}/{} failed: {}", base, target, e);
                Err(e)
            }
        }
    }

    async fn synthesize_series(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        days: u32,
        today: NaiveDate,
    ) -> Result<HistoricalSeries, MarketDataError> {
        let snapshot = self
            .get_rates(base.as_str(), Some(&[target.as_str()][..]))
            .await?;
        let current = snapshot.rate(target.as_str()).ok_or_else(|| {
            MarketDataError::NoRates(format!("no exchange rate found for {} to {}", base, target))
        })?;

        warn!(
            "Historical provider does not cover {}/{}; returning a synthetic {}-day series",
            base, target, days
        );

        let points = synthesize_history(&mut *self.lock_rng(), current, today, days);
        Ok(HistoricalSeries {
            points,
            origin: SeriesOrigin::Synthetic,
        })
    }

    /// Drop every cached snapshot.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
        debug!("Rate cache cleared");
    }

    /// Number of snapshots currently cached (stale ones included until read).
    pub fn cache_size(&self) -> usize {
        self.lock_cache().len()
    }
}

fn is_usable_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

/// Turn a provider body into a snapshot for `key`, filtering to its symbols.
fn build_snapshot(key: &CacheKey, body: LatestRates) -> Result<RateSnapshot, MarketDataError> {
    let all_rates: HashMap<String, f64> = body
        .rates
        .filter(|rates| !rates.is_empty())
        .ok_or_else(|| MarketDataError::NoRates("API returned no exchange rates".to_string()))?;

    let rates: BTreeMap<String, f64> = match key.symbols() {
        Some(symbols) => symbols
            .iter()
            .filter_map(|symbol| {
                all_rates
                    .get(symbol.as_str())
                    .copied()
                    .filter(|rate| is_usable_rate(*rate))
                    .map(|rate| (symbol.to_string(), rate))
            })
            .collect(),
        None => all_rates
            .into_iter()
            .filter(|(_, rate)| is_usable_rate(*rate))
            .collect(),
    };

    if rates.is_empty() {
        let requested = key
            .symbols()
            .map(|symbols| {
                symbols
                    .iter()
                    .map(CurrencyCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "all".to_string());
        return Err(MarketDataError::NoRates(format!(
            "requested currencies: {}",
            requested
        )));
    }

    let now = Utc::now();
    let base_currency = body
        .base
        .as_deref()
        .and_then(|b| CurrencyCode::parse(b).ok())
        .unwrap_or_else(|| key.base().clone());

    Ok(RateSnapshot {
        success: true,
        retrieved_at_epoch_ms: now.timestamp_millis(),
        base_currency,
        as_of_date: body.date.unwrap_or_else(|| now.date_naive()),
        rates,
    })
}

/// Extract `target` from each day of a time series, oldest first, keeping
/// the most recent `days` points.
fn series_from_time_series(
    series: TimeSeries,
    target: &CurrencyCode,
    days: u32,
) -> Result<HistoricalSeries, MarketDataError> {
    let rates = series
        .rates
        .ok_or_else(|| MarketDataError::NoRates("no historical rates found".to_string()))?;

    let mut points: Vec<HistoricalPoint> = rates
        .into_iter()
        .filter_map(|(date, day)| {
            day.get(target.as_str())
                .copied()
                .filter(|rate| is_usable_rate(*rate))
                .map(|rate| HistoricalPoint {
                    date,
                    rate: round_rate(rate),
                })
        })
        .collect();
    points.sort_by_key(|p| p.date);

    let excess = points.len().saturating_sub(days as usize);
    let points = points.split_off(excess);

    Ok(HistoricalSeries {
        points,
        origin: SeriesOrigin::Provider,
    })
}
