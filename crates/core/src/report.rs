//! Event source port and report generation

use std::sync::Arc;

use async_trait::async_trait;
use calhours_domain::{
    DailyHours, EventWindow, HoursSummary, NormalizedEvent, RawEvent, Result, TagTotal,
};
use tracing::{info, warn};

use crate::aggregator::{aggregate, event_list, tag_options, EventSort};
use crate::classifier::{EventClassifier, Rejection};

/// Supplies raw calendar events for a window.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch events starting inside `window`, at most `window.max_results`.
    async fn fetch_events(&self, window: &EventWindow) -> Result<Vec<RawEvent>>;
}

/// Everything the presentation layer needs for one window.
#[derive(Debug, Clone)]
pub struct HoursReport {
    pub window: EventWindow,
    /// Surviving events in source order.
    pub events: Vec<NormalizedEvent>,
    pub summary: HoursSummary,
    pub daily: Vec<DailyHours>,
    pub tag_totals: Vec<TagTotal>,
    pub rejections: Vec<Rejection>,
}

impl HoursReport {
    /// Sorted distinct primary tags.
    #[must_use]
    pub fn tag_options(&self) -> Vec<String> {
        tag_options(&self.events)
    }

    /// Events for the list view: optional tag filter, then `order`.
    #[must_use]
    pub fn list(&self, tag: Option<&str>, order: EventSort) -> Vec<&NormalizedEvent> {
        event_list(&self.events, tag, order)
    }
}

/// Fetches, classifies and aggregates one window per call.
pub struct HoursReportService {
    source: Arc<dyn EventSource>,
    classifier: EventClassifier,
}

impl HoursReportService {
    /// Create a new report service
    pub fn new(source: Arc<dyn EventSource>, classifier: EventClassifier) -> Self {
        Self { source, classifier }
    }

    /// Build a report for `window`.
    ///
    /// # Errors
    /// Propagates the event source's error; individual bad events are
    /// reported in `rejections` instead.
    pub async fn generate(&self, window: &EventWindow) -> Result<HoursReport> {
        let mut raw = self.source.fetch_events(window).await?;

        if raw.len() > window.max_results {
            warn!(
                fetched = raw.len(),
                max_results = window.max_results,
                "event source exceeded max_results, truncating"
            );
            raw.truncate(window.max_results);
        }

        let batch = self.classifier.classify_batch(&raw);
        let colors = &self.classifier.registry().config().colors;
        let aggregation = aggregate(&batch.events, window.date_range(), colors);

        info!(
            fetched = raw.len(),
            kept = batch.events.len(),
            rejected = batch.rejections.len(),
            total_hours = aggregation.summary.total_hours,
            "hours report generated"
        );

        Ok(HoursReport {
            window: *window,
            events: batch.events,
            summary: aggregation.summary,
            daily: aggregation.daily,
            tag_totals: aggregation.tag_totals,
            rejections: batch.rejections,
        })
    }
}
