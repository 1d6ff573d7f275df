use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of decimal places historical rates are rounded to.
pub const HISTORICAL_RATE_DECIMALS: i32 = 6;

/// One day's closing rate for a currency pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Where a historical series came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesOrigin {
    /// Daily rates reported by the historical provider.
    Provider,
    /// Generated locally because the provider rejected the pair.
    ///
    /// Synthetic series are a presentation aid for charts. They end at the
    /// live rate but the earlier points are random drift, not market data.
    Synthetic,
}

/// Ordered (ascending by date) rate history for a currency pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub points: Vec<HistoricalPoint>,
    pub origin: SeriesOrigin,
}

impl HistoricalSeries {
    pub fn is_synthetic(&self) -> bool {
        self.origin == SeriesOrigin::Synthetic
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&HistoricalPoint> {
        self.points.last()
    }
}

/// Round a rate to [`HISTORICAL_RATE_DECIMALS`] places.
pub fn round_rate(rate: f64) -> f64 {
    let factor = 10f64.powi(HISTORICAL_RATE_DECIMALS);
    (rate * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_rate() {
        assert_eq!(round_rate(1.23456789), 1.234568);
        assert_eq!(round_rate(0.8), 0.8);
        assert_eq!(round_rate(150.0000004), 150.0);
    }

    #[test]
    fn test_origin_serializes_lowercase() {
        let json = serde_json::to_string(&SeriesOrigin::Synthetic).unwrap();
        assert_eq!(json, "\"synthetic\"");
    }
}
