//! Provider response bodies shared by the HTTP providers.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Deserialize;

/// Body of a "latest rates for base currency" endpoint.
///
/// Every field is optional on the wire; the client decides what a missing
/// field means.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LatestRates {
    /// Base currency echoed by the provider
    #[serde(default)]
    pub base: Option<String>,

    /// The provider's "as of" date
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Units of each currency per one unit of base
    #[serde(default)]
    pub rates: Option<HashMap<String, f64>>,
}

/// Body of a daily time series endpoint: date → (currency → rate).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TimeSeries {
    #[serde(default)]
    pub rates: Option<BTreeMap<NaiveDate, HashMap<String, f64>>>,
}
