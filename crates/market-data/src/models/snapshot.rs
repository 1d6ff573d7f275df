use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// Latest rates for one base currency, as returned by the rate client.
///
/// Snapshots are immutable once built; the cache hands out clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    /// Always `true` for snapshots produced by a completed fetch
    pub success: bool,

    /// Wall-clock time the provider response was accepted (Unix epoch ms)
    pub retrieved_at_epoch_ms: i64,

    /// The currency the rates are quoted against
    pub base_currency: CurrencyCode,

    /// Provider's "as of" date, or the retrieval date if it gave none
    pub as_of_date: NaiveDate,

    /// Units of each target currency per one unit of `base_currency`
    pub rates: BTreeMap<String, f64>,
}

impl RateSnapshot {
    /// Look up the rate for a single target currency.
    pub fn rate(&self, target: &str) -> Option<f64> {
        self.rates.get(target).copied()
    }
}
