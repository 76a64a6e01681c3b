//! Event classification
//!
//! Turns one [`RawEvent`] into a [`NormalizedEvent`] or a [`Rejection`].
//! Classification is stateless: the same event and registry always give the
//! same outcome, and a fault in one event never affects another.

use std::sync::Arc;

use calhours_domain::utils::title::title_or_placeholder;
use calhours_domain::{ClassifierConfig, MalformedTime, NormalizedEvent, RawEvent, Result};
use thiserror::Error;
use tracing::{debug, warn};

use crate::duration::resolve_from_moments;
use crate::fallback::{TagContext, TagResolver};
use crate::registry::PatternRegistry;
use crate::tags::extract_tags;
use crate::utils::markup::strip_tag_markup;

/// Why an event was left out of the report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("duration {hours:.2}h is below the {minimum:.2}h minimum")]
    BelowMinimum { hours: f64, minimum: f64 },

    #[error("negative duration {hours:.2}h")]
    NegativeDuration { hours: f64 },

    #[error(transparent)]
    MalformedTime(#[from] MalformedTime),

    #[error("event has no start time")]
    MissingStart,
}

impl RejectReason {
    /// Short events are routine noise; everything else points at bad data.
    #[must_use]
    pub fn is_noise(&self) -> bool {
        matches!(self, Self::BelowMinimum { .. })
    }
}

/// An event that did not survive classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("event '{event_id}' rejected: {reason}")]
pub struct Rejection {
    pub event_id: String,
    #[source]
    pub reason: RejectReason,
}

impl Rejection {
    fn new(event_id: &str, reason: impl Into<RejectReason>) -> Self {
        Self { event_id: event_id.to_string(), reason: reason.into() }
    }
}

/// Result of classifying a sequence of events. Both lists keep input order.
#[derive(Debug, Clone, Default)]
pub struct ClassificationBatch {
    pub events: Vec<NormalizedEvent>,
    pub rejections: Vec<Rejection>,
}

impl ClassificationBatch {
    /// Number of events that went in.
    #[must_use]
    pub fn total(&self) -> usize {
        self.events.len() + self.rejections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Round to two decimals, half away from zero.
#[must_use]
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Classifies raw events against a compiled registry.
#[derive(Debug, Clone)]
pub struct EventClassifier {
    registry: Arc<PatternRegistry>,
    resolver: Arc<TagResolver>,
}

impl EventClassifier {
    /// Classifier using the standard tag fallback chain.
    #[must_use]
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry, resolver: Arc::new(TagResolver::standard()) }
    }

    /// Compile `config` and build a classifier from it.
    ///
    /// # Errors
    /// Returns `CalHoursError::Config` when the configuration is invalid.
    pub fn from_config(config: ClassifierConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(PatternRegistry::compile(config)?)))
    }

    /// Replace the tag fallback chain.
    #[must_use]
    pub fn with_resolver(mut self, resolver: TagResolver) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Classify one event.
    ///
    /// # Errors
    /// Returns a [`Rejection`] when the event has no start, carries a
    /// malformed time, or its hours are negative or under the minimum.
    pub fn classify(&self, raw: &RawEvent) -> std::result::Result<NormalizedEvent, Rejection> {
        let registry = self.registry.as_ref();
        let original_title = title_or_placeholder(raw.title.as_deref());
        let description = raw.description.clone().unwrap_or_default();

        let manual_tags = extract_tags(registry, &original_title, &description);
        let context = TagContext { manual_tags: &manual_tags, color_id: raw.color_id.as_deref() };
        let resolved = self.resolver.resolve(&context, registry);

        let start = raw
            .start
            .moment()
            .map_err(|e| Rejection::new(&raw.id, e))?
            .ok_or_else(|| Rejection::new(&raw.id, RejectReason::MissingStart))?;
        let end = raw.end.moment().map_err(|e| Rejection::new(&raw.id, e))?;

        let text = format!("{original_title} {description}");
        let hours = resolve_from_moments(registry, Some(start), end, &text);

        if hours < 0.0 {
            return Err(Rejection::new(&raw.id, RejectReason::NegativeDuration { hours }));
        }
        // Compared before rounding: an event exactly at the floor is kept even
        // when its rounded hours land just under it.
        let minimum = registry.min_duration_hours();
        if hours < minimum {
            return Err(Rejection::new(&raw.id, RejectReason::BelowMinimum { hours, minimum }));
        }

        let primary_tag = resolved.primary().to_string();
        let color = registry.tag_color(&primary_tag);

        Ok(NormalizedEvent {
            id: raw.id.clone(),
            title: strip_tag_markup(&original_title),
            original_title,
            description,
            tags: resolved.tags,
            primary_tag,
            hours: round_hours(hours),
            date: start.date(),
            start_time: start.instant_utc(),
            color,
        })
    }

    /// Classify a sequence, keeping survivors and rejections apart.
    pub fn classify_batch<'a, I>(&self, events: I) -> ClassificationBatch
    where
        I: IntoIterator<Item = &'a RawEvent>,
    {
        let mut batch = ClassificationBatch::default();

        for raw in events {
            match self.classify(raw) {
                Ok(event) => batch.events.push(event),
                Err(rejection) => {
                    if rejection.reason.is_noise() {
                        debug!(event_id = %rejection.event_id, reason = %rejection.reason, "event discarded");
                    } else {
                        warn!(event_id = %rejection.event_id, reason = %rejection.reason, "event rejected");
                    }
                    batch.rejections.push(rejection);
                }
            }
        }

        debug!(kept = batch.events.len(), rejected = batch.rejections.len(), "classified batch");
        batch
    }
}
