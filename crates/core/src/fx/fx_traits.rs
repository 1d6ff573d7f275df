use async_trait::async_trait;
use rust_decimal::Decimal;

use super::fx_model::{Conversion, CurrencyPair};
use crate::chart::ChartPeriod;
use crate::errors::Result;
use ratewise_market_data::HistoricalSeries;

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Convert `amount` across `pair` at the latest rate.
    async fn convert(&self, amount: Decimal, pair: &CurrencyPair) -> Result<Conversion>;

    /// Latest rate for `pair`.
    async fn get_latest_exchange_rate(&self, pair: &CurrencyPair) -> Result<Decimal>;

    /// Daily history for `pair` over a chart period.
    async fn get_historical_rates(
        &self,
        pair: &CurrencyPair,
        period: ChartPeriod,
    ) -> Result<HistoricalSeries>;

    /// Drop every cached rate so the next lookup goes to the network.
    fn clear_rate_cache(&self);

    /// Number of cached rate snapshots.
    fn cached_rate_count(&self) -> usize;
}
