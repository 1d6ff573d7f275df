//! Ratewise Core - conversion, calculator, chart and appearance logic.
//!
//! Rates come from the `ratewise-market-data` crate; this crate turns them
//! into conversions and chart series and holds the user-facing state around
//! them.

pub mod calculator;
pub mod chart;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
