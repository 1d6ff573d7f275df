//! Exchange rate models
//!
//! - `currency` - Validated currency code (CurrencyCode)
//! - `snapshot` - Latest rates for a base currency (RateSnapshot)
//! - `historical` - Daily rate history (HistoricalPoint, HistoricalSeries)

mod currency;
mod historical;
mod snapshot;

pub use currency::CurrencyCode;
pub use historical::{
    round_rate, HistoricalPoint, HistoricalSeries, SeriesOrigin, HISTORICAL_RATE_DECIMALS,
};
pub use snapshot::RateSnapshot;
