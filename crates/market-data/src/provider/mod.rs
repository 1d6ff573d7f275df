//! Rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all providers implement
//! - Provider capabilities
//! - The raw response bodies providers hand back to the client
//! - Concrete HTTP providers (ExchangeRate-API, Frankfurter)
//!
//! Providers are thin: they issue one GET and decode the body. Caching,
//! throttling, supersession and symbol filtering live in the client.

mod capabilities;
mod http;
mod payloads;
mod traits;

pub mod exchange_rate_api;
pub mod frankfurter;

// Re-exports
pub use capabilities::ProviderCapabilities;
pub use payloads::{LatestRates, TimeSeries};
pub use traits::RateProvider;
