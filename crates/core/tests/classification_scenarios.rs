//! Integration tests for end-to-end event classification
//!
//! Each test follows one realistic calendar entry through tag extraction,
//! the fallback chain, duration resolution and the minimum-duration filter.

mod support;

use calhours_core::{
    ColorTag, DefaultTag, EventClassifier, ManualTags, PatternRegistry, RejectReason, TagResolver,
};
use calhours_domain::{ClassifierConfig, DurationPattern, RawEvent};
use chrono::NaiveDate;
use support::{default_classifier, event_of_minutes, timed_event};

fn approx(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

// ============================================================================
// Reference scenarios
// ============================================================================

/// `[trabajo] Standup` for exactly fifteen minutes sits on the boundary
#[test]
fn test_bracket_tagged_standup_is_kept() {
    let raw = timed_event("s1", "[trabajo] Standup", "09:00", "09:15");

    let event = default_classifier().classify(&raw).expect("kept");
    approx(event.hours, 0.25);
    assert_eq!(event.primary_tag, "trabajo");
    assert_eq!(event.tags, vec!["trabajo"]);
    assert_eq!(event.title, "Standup");
}

/// Five minutes is below the default floor even with a mapped color
#[test]
fn test_short_colored_standup_is_rejected() {
    let raw = timed_event("s2", "Standup", "09:00", "09:05").with_color("6");

    let rejection = default_classifier().classify(&raw).expect_err("rejected");
    assert_eq!(rejection.event_id, "s2");
    assert!(matches!(rejection.reason, RejectReason::BelowMinimum { .. }));
}

/// A two-day all-day workshop counts two full days
#[test]
fn test_all_day_workshop() {
    let raw = RawEvent::new("s3").with_title("Workshop").all_day("2024-01-01", "2024-01-03");

    let event = default_classifier().classify(&raw).expect("kept");
    approx(event.hours, 16.0);
    assert_eq!(event.primary_tag, "sin-categoría");
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
}

/// Labelled duration overrides ten real minutes; color supplies the tag
#[test]
fn test_labelled_duration_with_color_tag() {
    let raw = timed_event("s4", "duración: 3.5 training", "10:00", "10:10").with_color("3");

    let event = default_classifier().classify(&raw).expect("kept");
    approx(event.hours, 3.5);
    assert_eq!(event.primary_tag, "formacion");
    assert_eq!(event.color, "#ea4335");
}

// ============================================================================
// Tag precedence
// ============================================================================

#[test]
fn test_manual_tags_beat_color() {
    let raw = timed_event("p1", "#personal dentista", "09:00", "10:00").with_color("6");

    let event = default_classifier().classify(&raw).expect("kept");
    assert_eq!(event.tags, vec!["personal"]);
    assert_eq!(event.color, "#34a853");
}

#[test]
fn test_description_contributes_tags() {
    let raw = timed_event("p2", "[proyecto] Sprint review", "14:00", "15:00")
        .with_description("tags: cliente-a");

    let event = default_classifier().classify(&raw).expect("kept");
    assert_eq!(event.tags, vec!["proyecto", "cliente-a"]);
    assert_eq!(event.primary_tag, "proyecto");
}

#[test]
fn test_unmapped_color_and_no_tags_uses_default() {
    let raw = timed_event("p3", "Llamada", "09:00", "10:00").with_color("11");

    let event = default_classifier().classify(&raw).expect("kept");
    assert_eq!(event.tags, vec!["sin-categoría"]);
    assert_eq!(event.color, "#607d8b");
}

#[test]
fn test_unknown_manual_tag_gets_fallback_color() {
    let raw = timed_event("p4", "#marketing campaña", "09:00", "10:00");

    let event = default_classifier().classify(&raw).expect("kept");
    assert_eq!(event.primary_tag, "marketing");
    assert_eq!(event.color, "#4285f4");
}

#[test]
fn test_custom_resolver_without_color_strategy() {
    let classifier = default_classifier()
        .with_resolver(TagResolver::new(vec![Box::new(ManualTags), Box::new(DefaultTag)]));
    let raw = timed_event("p5", "Standup", "09:00", "10:00").with_color("6");

    assert_eq!(classifier.classify(&raw).expect("kept").primary_tag, "sin-categoría");

    let color_first = default_classifier()
        .with_resolver(TagResolver::new(vec![Box::new(ColorTag), Box::new(ManualTags)]));
    let raw = timed_event("p6", "[personal] Standup", "09:00", "10:00").with_color("6");
    assert_eq!(color_first.classify(&raw).expect("kept").primary_tag, "trabajo");
}

// ============================================================================
// Duration policy
// ============================================================================

#[test]
fn test_minimum_boundary() {
    let classifier = default_classifier();
    assert!(classifier.classify(&event_of_minutes("b1", "Sync", 15)).is_ok());
    assert!(classifier.classify(&event_of_minutes("b2", "Sync", 14)).is_err());
}

#[test]
fn test_text_override_can_drop_a_long_event() {
    let raw = timed_event("d1", "Guardia 0.1h", "08:00", "16:00");

    let rejection = default_classifier().classify(&raw).expect_err("override below minimum");
    assert!(matches!(rejection.reason, RejectReason::BelowMinimum { .. }));
}

#[test]
fn test_custom_minimum_and_patterns() {
    let mut config = ClassifierConfig::default();
    config.hours.min_duration_minutes = 30;
    config.hours.duration_patterns = vec![DurationPattern::decimal(r"(?i)(\d+)\s*min")];
    let classifier = EventClassifier::new(std::sync::Arc::new(
        PatternRegistry::compile(config).expect("valid config"),
    ));

    // "2h" is no longer an override; 20 real minutes fall under the new floor
    let raw = timed_event("d2", "Pairing 2h", "09:00", "09:20");
    assert!(classifier.classify(&raw).is_err());
}

#[test]
fn test_timestamp_offset_keeps_local_date() {
    let raw = RawEvent::new("t1")
        .with_title("Cierre")
        .timed("2024-03-04T23:00:00-03:00", "2024-03-05T00:30:00-03:00");

    let event = default_classifier().classify(&raw).expect("kept");
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 3, 4).expect("date"));
    approx(event.hours, 1.5);
    assert_eq!(event.start_time.to_rfc3339(), "2024-03-05T02:00:00+00:00");
}

// ============================================================================
// Batch behaviour
// ============================================================================

#[test]
fn test_faulty_event_does_not_affect_neighbours() {
    let mut broken = timed_event("bad", "Roto", "09:00", "10:00");
    broken.start = calhours_domain::EventTime::timed("31/02/2024 09:00");
    let events = vec![
        timed_event("ok1", "Uno", "09:00", "10:00"),
        broken,
        timed_event("ok2", "Dos", "11:00", "12:30"),
    ];

    let batch = default_classifier().classify_batch(&events);
    assert_eq!(batch.events.len(), 2);
    assert_eq!(batch.rejections.len(), 1);
    assert!(matches!(batch.rejections[0].reason, RejectReason::MalformedTime(_)));
}

#[test]
fn test_empty_batch_is_valid() {
    let events: Vec<RawEvent> = Vec::new();
    let batch = default_classifier().classify_batch(&events);
    assert!(batch.is_empty());
    assert_eq!(batch.total(), 0);
}
