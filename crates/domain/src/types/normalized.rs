//! Classified events ready for reporting

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An event that survived classification.
///
/// `tags` is ordered, distinct and never empty; `primary_tag` is its first
/// element. `hours` is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub id: String,
    /// Title with `[...]` tag markup removed.
    pub title: String,
    pub original_title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub primary_tag: String,
    pub hours: f64,
    /// Aggregation key: the calendar date the event starts on.
    pub date: NaiveDate,
    /// Start instant, used for ordering only.
    pub start_time: DateTime<Utc>,
    pub color: String,
}
