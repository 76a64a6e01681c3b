//! Raw calendar events
//!
//! The wire shape follows the calendar events-list format (`summary`,
//! `colorId`, `start.dateTime` / `start.date`). Time values are kept as the
//! strings received and parsed on demand, so one malformed value only affects
//! the event that carries it.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A time value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {field} value '{value}'")]
pub struct MalformedTime {
    /// `dateTime` or `date`.
    pub field: &'static str,
    /// The offending text.
    pub value: String,
}

/// Start or end of an event.
///
/// Timed events carry `date_time`; all-day events carry `date`. When both are
/// present the timestamp wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    /// Timed value from an RFC 3339 string.
    pub fn timed(date_time: impl Into<String>) -> Self {
        Self { date_time: Some(date_time.into()), ..Self::default() }
    }

    /// All-day value from a `YYYY-MM-DD` string.
    pub fn all_day(date: impl Into<String>) -> Self {
        Self { date: Some(date.into()), ..Self::default() }
    }

    /// Parse whichever representation is present.
    ///
    /// Timestamps without an offset are read as UTC.
    ///
    /// # Errors
    /// Returns [`MalformedTime`] when the present value does not parse.
    pub fn moment(&self) -> Result<Option<EventMoment>, MalformedTime> {
        if let Some(raw) = self.date_time.as_deref() {
            return parse_timestamp(raw).map(|ts| Some(EventMoment::Timestamp(ts)));
        }
        if let Some(raw) = self.date.as_deref() {
            return NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map(|date| Some(EventMoment::Date(date)))
                .map_err(|_| MalformedTime { field: "date", value: raw.to_string() });
        }
        Ok(None)
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, MalformedTime> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, NAIVE_DATE_TIME_FORMAT)
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        })
        .map_err(|_| MalformedTime { field: "dateTime", value: raw.to_string() })
}

/// A parsed [`EventTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMoment {
    /// Instant with the offset it was written in.
    Timestamp(DateTime<FixedOffset>),
    /// All-day calendar date.
    Date(NaiveDate),
}

impl EventMoment {
    /// Calendar date as written (local to the timestamp's own offset).
    ///
    /// This deliberately differs from keying on the UTC date: an event at
    /// `2024-03-04T23:00:00-03:00` belongs to 2024-03-04, not 2024-03-05.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Timestamp(ts) => ts.date_naive(),
            Self::Date(date) => *date,
        }
    }

    /// UTC instant; all-day dates map to midnight UTC.
    #[must_use]
    pub fn instant_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Timestamp(ts) => ts.with_timezone(&Utc),
            Self::Date(date) => Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
        }
    }
}

/// Calendar event as received from an event source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "summary", alias = "title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

impl RawEvent {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color_id: impl Into<String>) -> Self {
        self.color_id = Some(color_id.into());
        self
    }

    /// Set start and end as RFC 3339 timestamps.
    #[must_use]
    pub fn timed(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = EventTime::timed(start);
        self.end = EventTime::timed(end);
        self
    }

    /// Set start and end as all-day dates (end exclusive).
    #[must_use]
    pub fn all_day(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = EventTime::all_day(start);
        self.end = EventTime::all_day(end);
        self
    }
}
