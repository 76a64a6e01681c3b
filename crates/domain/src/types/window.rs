//! Time window requested from an event source

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DAYS_RANGE, MAX_EVENTS_PER_REQUEST};
use crate::errors::{CalHoursError, Result};
use crate::types::stats::DateRange;

/// Seconds from midnight to 23:59:59.
const END_OF_DAY_SECONDS: i64 = 86_399;

/// Bounds and cap for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub max_results: usize,
}

impl EventWindow {
    /// Window from the start of `start` to 23:59:59 on `end` (UTC).
    ///
    /// # Errors
    /// Returns `CalHoursError::InvalidInput` when `end` precedes `start`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(CalHoursError::InvalidInput(format!(
                "window end {end} precedes start {start}"
            )));
        }
        let start_at = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
        let end_at = Utc.from_utc_datetime(&end.and_time(NaiveTime::MIN))
            + Duration::seconds(END_OF_DAY_SECONDS);
        Ok(Self { start: start_at, end: end_at, max_results: MAX_EVENTS_PER_REQUEST })
    }

    /// The `days` days ending on `today`.
    #[must_use]
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let start = today - Duration::days(i64::from(days));
        let start_at = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
        let end_at = Utc.from_utc_datetime(&today.and_time(NaiveTime::MIN))
            + Duration::seconds(END_OF_DAY_SECONDS);
        Self { start: start_at, end: end_at, max_results: MAX_EVENTS_PER_REQUEST }
    }

    /// Default reporting window ending today.
    #[must_use]
    pub fn default_range(today: NaiveDate) -> Self {
        Self::last_days(today, DEFAULT_DAYS_RANGE)
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Whether `instant` falls inside the window (both ends inclusive).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Calendar range covered, for averaging.
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start.date_naive(), self.end.date_naive())
    }
}
