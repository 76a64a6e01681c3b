//! Aggregation outputs
//!
//! Plain values produced by the aggregator; the presentation layer renders
//! them as summary counters, a daily line chart and a per-tag doughnut chart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline counters for a set of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursSummary {
    pub total_hours: f64,
    pub total_events: usize,
    /// Distinct primary tags.
    pub unique_tags: usize,
    pub avg_hours_per_day: f64,
}

/// Hours booked on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHours {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Hours booked under one primary tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagTotal {
    pub tag: String,
    /// Tag as shown in chart legends.
    pub label: String,
    pub hours: f64,
    /// Chart color assigned by position in the totals list.
    pub color: String,
}

/// Inclusive reporting range used for the per-day average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Days between `start` and `end`, never less than one.
    #[must_use]
    pub fn days_for_average(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }
}
