//! Duration resolution
//!
//! Hours come from two places: the event's structured start and end, and
//! free-text overrides such as `2h`, `1:30` or `duración: 3.5`. A matching
//! override always replaces the structured value.

use calhours_domain::constants::SECONDS_PER_HOUR;
use calhours_domain::{DurationForm, EventMoment, MalformedTime, RawEvent};
use regex::Captures;

use crate::registry::{DurationPatterns, PatternRegistry};

const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Hours implied by the structured start and end.
///
/// Two timestamps give their difference (negative when end precedes start);
/// two all-day dates give whole days times `full_day_hours`. Anything else,
/// including a timestamp paired with a date, gives 0.
#[must_use]
pub fn base_hours(start: Option<EventMoment>, end: Option<EventMoment>, full_day_hours: f64) -> f64 {
    match (start, end) {
        (Some(EventMoment::Timestamp(start)), Some(EventMoment::Timestamp(end))) => {
            #[allow(clippy::cast_precision_loss)]
            let millis = (end - start).num_milliseconds() as f64;
            millis / MILLIS_PER_SECOND / SECONDS_PER_HOUR
        }
        (Some(EventMoment::Date(start)), Some(EventMoment::Date(end))) => {
            #[allow(clippy::cast_precision_loss)]
            let days = (end - start).num_days() as f64;
            days * full_day_hours
        }
        _ => 0.0,
    }
}

/// Hours stated in free text, from the first pattern that yields a number.
#[must_use]
pub fn text_override(patterns: &DurationPatterns, text: &str) -> Option<f64> {
    patterns.evaluate(text, read_duration).into_iter().next()
}

fn read_duration(form: &DurationForm, caps: &Captures<'_>) -> Option<f64> {
    match form {
        DurationForm::Decimal => read_number(caps, 1),
        DurationForm::HoursMinutes => {
            let hours = read_number(caps, 1)?;
            let minutes = read_number(caps, 2)?;
            Some(hours + minutes / 60.0)
        }
    }
}

fn read_number(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Resolve an event's hours: structured base, replaced by a text override
/// when one is found. Rounding is left to the caller.
///
/// # Errors
/// Returns [`MalformedTime`] when start or end carries an unparseable value.
pub fn resolve_duration(
    registry: &PatternRegistry,
    raw: &RawEvent,
    text: &str,
) -> Result<f64, MalformedTime> {
    let start = raw.start.moment()?;
    let end = raw.end.moment()?;
    Ok(resolve_from_moments(registry, start, end, text))
}

/// [`resolve_duration`] for already-parsed moments.
#[must_use]
pub fn resolve_from_moments(
    registry: &PatternRegistry,
    start: Option<EventMoment>,
    end: Option<EventMoment>,
    text: &str,
) -> f64 {
    text_override(registry.duration_patterns(), text)
        .unwrap_or_else(|| base_hours(start, end, registry.full_day_hours()))
}
