//! Chart time periods and axis label formatting for rate history charts.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time window offered by the history chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    OneWeek,
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "30y")]
    ThirtyYears,
}

impl ChartPeriod {
    /// All periods in selector order.
    pub const ALL: [ChartPeriod; 10] = [
        ChartPeriod::OneDay,
        ChartPeriod::OneWeek,
        ChartPeriod::OneMonth,
        ChartPeriod::ThreeMonths,
        ChartPeriod::SixMonths,
        ChartPeriod::OneYear,
        ChartPeriod::TwoYears,
        ChartPeriod::FiveYears,
        ChartPeriod::TenYears,
        ChartPeriod::ThirtyYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::OneDay => "1d",
            ChartPeriod::OneWeek => "7d",
            ChartPeriod::OneMonth => "1m",
            ChartPeriod::ThreeMonths => "3m",
            ChartPeriod::SixMonths => "6m",
            ChartPeriod::OneYear => "1y",
            ChartPeriod::TwoYears => "2y",
            ChartPeriod::FiveYears => "5y",
            ChartPeriod::TenYears => "10y",
            ChartPeriod::ThirtyYears => "30y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::OneDay => "1 Day",
            ChartPeriod::OneWeek => "7 Days",
            ChartPeriod::OneMonth => "1 Month",
            ChartPeriod::ThreeMonths => "3 Months",
            ChartPeriod::SixMonths => "6 Months",
            ChartPeriod::OneYear => "1 Year",
            ChartPeriod::TwoYears => "2 Years",
            ChartPeriod::FiveYears => "5 Years",
            ChartPeriod::TenYears => "10 Years",
            ChartPeriod::ThirtyYears => "30 Years",
        }
    }

    /// Number of days of history requested for this period.
    pub fn days(&self) -> u32 {
        match self {
            ChartPeriod::OneDay => 1,
            ChartPeriod::OneWeek => 7,
            ChartPeriod::OneMonth => 30,
            ChartPeriod::ThreeMonths => 90,
            ChartPeriod::SixMonths => 180,
            ChartPeriod::OneYear => 365,
            ChartPeriod::TwoYears => 730,
            ChartPeriod::FiveYears => 1825,
            ChartPeriod::TenYears => 3650,
            ChartPeriod::ThirtyYears => 10950,
        }
    }

    pub fn label_format(&self) -> DateLabelFormat {
        DateLabelFormat::for_days(self.days())
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        ChartPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == id)
            .ok_or_else(|| format!("Unknown chart period: {}", s))
    }
}

/// How dates are rendered on the chart axis, chosen by how many days the
/// chart spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLabelFormat {
    /// "Mon, Mar 4"
    WeekdayMonthDay,
    /// "Mar 4"
    MonthDay,
    /// "Mar 24"
    MonthYear,
    /// "2024"
    Year,
}

impl DateLabelFormat {
    pub fn for_days(days: u32) -> Self {
        match days {
            0..=7 => DateLabelFormat::WeekdayMonthDay,
            8..=90 => DateLabelFormat::MonthDay,
            91..=365 => DateLabelFormat::MonthYear,
            _ => DateLabelFormat::Year,
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateLabelFormat::WeekdayMonthDay => "%a, %b %-d",
            DateLabelFormat::MonthDay => "%b %-d",
            DateLabelFormat::MonthYear => "%b %y",
            DateLabelFormat::Year => "%Y",
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}
