//! Shared test helpers for `calhours-core` integration tests.
//!
//! Fixtures for raw events and a compiled default registry, plus an
//! in-memory event source so report tests focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod sources;

use std::sync::Arc;

use calhours_core::{EventClassifier, PatternRegistry};
use calhours_domain::{ClassifierConfig, RawEvent};

/// Registry compiled from the default configuration.
pub fn default_registry() -> Arc<PatternRegistry> {
    Arc::new(PatternRegistry::compile(ClassifierConfig::default()).expect("defaults compile"))
}

/// Classifier over the default configuration.
pub fn default_classifier() -> EventClassifier {
    EventClassifier::new(default_registry())
}

/// Timed event on 2024-03-04 between two `HH:MM` times (UTC).
pub fn timed_event(id: &str, title: &str, from: &str, to: &str) -> RawEvent {
    RawEvent::new(id)
        .with_title(title)
        .timed(format!("2024-03-04T{from}:00Z"), format!("2024-03-04T{to}:00Z"))
}

/// Timed event on an arbitrary `YYYY-MM-DD` date.
pub fn timed_event_on(id: &str, title: &str, date: &str, from: &str, to: &str) -> RawEvent {
    RawEvent::new(id)
        .with_title(title)
        .timed(format!("{date}T{from}:00Z"), format!("{date}T{to}:00Z"))
}

/// Event lasting `minutes` from 09:00 on 2024-03-04.
pub fn event_of_minutes(id: &str, title: &str, minutes: u32) -> RawEvent {
    let end = chrono::NaiveDate::from_ymd_opt(2024, 3, 4)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid start")
        + chrono::Duration::minutes(i64::from(minutes));
    RawEvent::new(id)
        .with_title(title)
        .timed("2024-03-04T09:00:00Z", format!("{}Z", end.format("%Y-%m-%dT%H:%M:%S")))
}
