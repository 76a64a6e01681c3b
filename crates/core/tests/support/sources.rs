//! In-memory event sources for report tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use calhours_core::EventSource;
use calhours_domain::{CalHoursError, EventWindow, RawEvent, Result as DomainResult};

/// Returns a fixed list of events regardless of the window and counts calls.
#[derive(Default, Clone)]
pub struct StaticEventSource {
    events: Arc<Vec<RawEvent>>,
    calls: Arc<AtomicUsize>,
}

impl StaticEventSource {
    /// Create a new source seeded with the provided events.
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self { events: Arc::new(events), calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventSource for StaticEventSource {
    async fn fetch_events(&self, _window: &EventWindow) -> DomainResult<Vec<RawEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.events.as_ref().clone())
    }
}

/// Always fails, as an unreachable calendar would.
#[derive(Default, Clone, Copy)]
pub struct FailingEventSource;

#[async_trait]
impl EventSource for FailingEventSource {
    async fn fetch_events(&self, _window: &EventWindow) -> DomainResult<Vec<RawEvent>> {
        Err(CalHoursError::Source("calendar unavailable".to_string()))
    }
}
