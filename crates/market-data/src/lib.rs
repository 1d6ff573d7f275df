//! Ratewise Market Data Crate
//!
//! Live and historical foreign-exchange rates for the Ratewise converter.
//!
//! # Overview
//!
//! The crate is built around a single [`RateClient`] that callers construct
//! once and share:
//! - Latest rates for a base currency, optionally narrowed to a few symbols
//! - A TTL cache so repeated lookups within a few minutes stay local
//! - A minimum spacing between outbound requests
//! - Cancellation of a live request when a newer one replaces it
//! - Daily history for charts, with a clearly tagged synthetic fallback for
//!   pairs the historical provider does not cover
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    RateClient    |  cache / throttle / request gate
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------------+
//! |   RateProvider   | --> | ExchangeRate-API (v4)  |  latest
//! +------------------+     | Frankfurter (ECB)      |  latest + history
//!                          +------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateSnapshot`] - Latest rates for one base currency
//! - [`HistoricalSeries`] / [`HistoricalPoint`] - Daily rate history
//! - [`CurrencyCode`] - Validated three-letter currency code
//! - [`MarketDataError`] - Error taxonomy shared by every operation

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod provider;

pub use client::{RateClient, DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
pub use config::RateClientConfig;
pub use errors::MarketDataError;
pub use models::{
    CurrencyCode, HistoricalPoint, HistoricalSeries, RateSnapshot, SeriesOrigin,
};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::frankfurter::FrankfurterProvider;
pub use provider::{LatestRates, ProviderCapabilities, RateProvider, TimeSeries};
