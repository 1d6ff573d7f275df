use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use super::fx_model::{Conversion, CurrencyPair, CONVERTED_AMOUNT_DECIMALS};
use super::fx_traits::FxServiceTrait;
use crate::chart::ChartPeriod;
use crate::errors::{Error, Result};
use ratewise_market_data::{CurrencyCode, HistoricalSeries, RateClient, RateSnapshot};

pub struct FxService {
    client: Arc<RateClient>,
}

impl FxService {
    pub fn new(client: Arc<RateClient>) -> Self {
        Self { client }
    }

    /// Latest rate for `pair`, with the snapshot it was read from.
    async fn latest_rate(&self, pair: &CurrencyPair) -> Result<(Decimal, RateSnapshot)> {
        let snapshot = self
            .client
            .get_rates(&pair.from_currency, Some(&[pair.to_currency.as_str()][..]))
            .await?;

        let to = pair.to_currency.trim().to_ascii_uppercase();
        let raw_rate = snapshot.rate(&to).ok_or_else(|| {
            Error::CurrencyConversionFailed(format!(
                "Exchange rate not found for {} to {}",
                pair.from_currency, pair.to_currency
            ))
        })?;

        Ok((Decimal::try_from(raw_rate)?, snapshot))
    }
}

/// Both codes must be well-formed, even when they name the same currency.
fn validate_codes(pair: &CurrencyPair) -> Result<()> {
    CurrencyCode::parse(&pair.from_currency)?;
    CurrencyCode::parse(&pair.to_currency)?;
    Ok(())
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn convert(&self, amount: Decimal, pair: &CurrencyPair) -> Result<Conversion> {
        if amount.is_sign_negative() {
            return Err(Error::CurrencyConversionFailed(format!(
                "Amount must not be negative: {}",
                amount
            )));
        }
        validate_codes(pair)?;

        let (rate, as_of_date, retrieved_at_epoch_ms) = if pair.is_identity() {
            let now = Utc::now();
            (Decimal::ONE, now.date_naive(), now.timestamp_millis())
        } else {
            let (rate, snapshot) = self.latest_rate(pair).await?;
            (rate, snapshot.as_of_date, snapshot.retrieved_at_epoch_ms)
        };

        let conversion = Conversion {
            pair: pair.clone(),
            amount,
            rate,
            converted: (amount * rate).round_dp(CONVERTED_AMOUNT_DECIMALS),
            as_of_date,
            retrieved_at_epoch_ms,
        };
        debug!(
            "Converted {} {} to {} {}",
            amount, pair.from_currency, conversion.converted, pair.to_currency
        );
        Ok(conversion)
    }

    async fn get_latest_exchange_rate(&self, pair: &CurrencyPair) -> Result<Decimal> {
        validate_codes(pair)?;
        if pair.is_identity() {
            return Ok(Decimal::ONE);
        }
        Ok(self.latest_rate(pair).await?.0)
    }

    async fn get_historical_rates(
        &self,
        pair: &CurrencyPair,
        period: ChartPeriod,
    ) -> Result<HistoricalSeries> {
        let series = self
            .client
            .get_historical_rates(&pair.from_currency, &pair.to_currency, period.days())
            .await?;
        debug!(
            "Loaded {} history points for {}->{} ({})",
            series.len(),
            pair.from_currency,
            pair.to_currency,
            period
        );
        Ok(series)
    }

    fn clear_rate_cache(&self) {
        self.client.clear_cache();
    }

    fn cached_rate_count(&self) -> usize {
        self.client.cache_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratewise_market_data::{
        LatestRates, MarketDataError, ProviderCapabilities, RateClientConfig,
        RateProvider, TimeSeries,
    };
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RateProvider for StaticProvider {
        fn id(&self) -> &'static str {
            "STATIC"
        }

        fn capabilities(&self) -> ProviderCapabilities {
            ProviderCapabilities {
                supports_latest: true,
                supports_historical: true,
            }
        }

        async fn fetch_latest(
            &self,
            base: &CurrencyCode,
        ) -> std::result::Result<LatestRates, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LatestRates {
                base: Some(base.to_string()),
                date: NaiveDate::from_ymd_opt(2024, 3, 1),
                rates: Some(HashMap::from([
                    ("EUR".to_string(), 0.92),
                    ("GBP".to_string(), 0.79),
                ])),
            })
        }

        async fn fetch_time_series(
            &self,
            _base: &CurrencyCode,
            _target: &CurrencyCode,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> std::result::Result<TimeSeries, MarketDataError> {
            Err(MarketDataError::HttpStatus {
                provider: "STATIC".to_string(),
                status: 422,
            })
        }
    }

    fn service() -> (FxService, Arc<StaticProvider>) {
        let provider = Arc::new(StaticProvider {
            calls: AtomicUsize::new(0),
        });
        let config = RateClientConfig {
            fallback_seed: Some(1),
            ..RateClientConfig::default()
        };
        let client = RateClient::new(config, provider.clone(), provider.clone());
        (FxService::new(Arc::new(client)), provider)
    }

    #[tokio::test(start_paused = true)]
    async fn test_convert_rounds_to_four_places() {
        let (service, _) = service();
        let conversion = service
            .convert(dec!(12.345), &CurrencyPair::new("USD", "EUR"))
            .await
            .unwrap();

        assert_eq!(conversion.rate, dec!(0.92));
        assert_eq!(conversion.converted, dec!(11.3574));
        assert_eq!(conversion.amount, dec!(12.345));
        assert_eq!(
            conversion.as_of_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_currency_skips_network() {
        let (service, provider) = service();
        let conversion = service
            .convert(dec!(5), &CurrencyPair::new("USD", "usd"))
            .await
            .unwrap();

        assert_eq!(conversion.rate, Decimal::ONE);
        assert_eq!(conversion.converted, dec!(5));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_codes_are_rejected_for_same_currency() {
        let (service, provider) = service();
        let pair = CurrencyPair::new("ab", "AB");

        let converted = service.convert(dec!(5), &pair).await;
        assert!(matches!(
            converted,
            Err(Error::MarketData(MarketDataError::InvalidCurrency(_)))
        ));
        let rate = service.get_latest_exchange_rate(&pair).await;
        assert!(matches!(
            rate,
            Err(Error::MarketData(MarketDataError::InvalidCurrency(_)))
        ));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_target_surfaces_market_data_error() {
        let (service, _) = service();
        let result = service
            .convert(dec!(1), &CurrencyPair::new("USD", "XXX"))
            .await;

        assert!(matches!(
            result,
            Err(Error::MarketData(MarketDataError::NoRates(_)))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_amount_is_rejected() {
        let (service, provider) = service();
        let result = service
            .convert(dec!(-1), &CurrencyPair::new("USD", "EUR"))
            .await;

        assert!(matches!(result, Err(Error::CurrencyConversionFailed(_))));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_lookups_share_the_cache() {
        let (service, provider) = service();
        let pair = CurrencyPair::new("USD", "GBP");

        service.get_latest_exchange_rate(&pair).await.unwrap();
        service.convert(dec!(10), &pair).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.cached_rate_count(), 1);

        service.clear_rate_cache();
        assert_eq!(service.cached_rate_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_for_period_uses_period_days() {
        let (service, _) = service();
        let series = service
            .get_historical_rates(&CurrencyPair::new("USD", "GBP"), ChartPeriod::OneWeek)
            .await
            .unwrap();

        assert!(series.is_synthetic());
        assert_eq!(series.len(), 7);
        assert_eq!(series.latest().unwrap().rate, 0.79);
    }
}
