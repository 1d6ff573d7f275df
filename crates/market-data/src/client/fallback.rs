//! Synthetic history for pairs the historical provider does not cover.
//!
//! The series is anchored on the live rate for today and walked backward with
//! a small random daily drift. It exists so a chart has something to draw; it
//! carries no information about past market rates.

use chrono::{Days, NaiveDate};
use rand::Rng;

use super::rate_client::MAX_HISTORY_DAYS;
use crate::models::{round_rate, HistoricalPoint};

/// Peak-to-peak width of the per-day trend factor (±1%).
const TREND_AMPLITUDE: f64 = 0.02;

/// Peak-to-peak width of the per-day noise factor (±0.5%).
const VARIATION_AMPLITUDE: f64 = 0.01;

fn daily_drift<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let trend = 1.0 + (rng.gen::<f64>() - 0.5) * TREND_AMPLITUDE;
    let variation = 1.0 + (rng.gen::<f64>() - 0.5) * VARIATION_AMPLITUDE;
    trend * variation
}

/// Build `days` points ending at `today`, whose last rate is `current_rate`.
///
/// At most [`MAX_HISTORY_DAYS`] points are produced, and the walk stops early
/// if it would step before the earliest representable date.
///
/// Each earlier point is the following day's unrounded rate divided by one
/// step of drift, so the chain compounds backward from the anchor.
pub fn synthesize_history<R: Rng + ?Sized>(
    rng: &mut R,
    current_rate: f64,
    today: NaiveDate,
    days: u32,
) -> Vec<HistoricalPoint> {
    let days = days.min(MAX_HISTORY_DAYS);
    let mut points = Vec::with_capacity(days as usize);
    let mut rate = current_rate;

    for offset in 0..days {
        let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            break;
        };
        if offset > 0 {
            rate /= daily_drift(rng);
        }
        points.push(HistoricalPoint {
            date,
            rate: round_rate(rate),
        });
    }

    points.reverse();
    points
}
