//! Event source backed by a JSON export on disk
//!
//! Accepts either a Google Calendar `events.list` response page
//! (`{"items": [...]}`) or a bare array of events. Only events whose start
//! falls inside the requested window are returned, capped at the window's
//! `max_results`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use calhours_core::EventSource;
use calhours_domain::{EventWindow, RawEvent, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::InfraError;

/// Top-level shape of an events file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventsDocument {
    Page {
        #[serde(default)]
        items: Vec<RawEvent>,
    },
    List(Vec<RawEvent>),
}

impl EventsDocument {
    fn into_events(self) -> Vec<RawEvent> {
        match self {
            Self::Page { items } => items,
            Self::List(events) => events,
        }
    }
}

/// Reads events from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileEventSource {
    path: PathBuf,
}

impl JsonFileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Vec<RawEvent>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(InfraError::from)?;
        let document: EventsDocument =
            serde_json::from_str(&contents).map_err(InfraError::from)?;
        Ok(document.into_events())
    }
}

/// Whether an event belongs to `window`.
///
/// Events whose start cannot be read are kept so the classifier can report
/// them as rejections instead of dropping them silently.
fn starts_in_window(event: &RawEvent, window: &EventWindow) -> bool {
    match event.start.moment() {
        Ok(Some(moment)) => window.contains(moment.instant_utc()),
        Ok(None) | Err(_) => true,
    }
}

#[async_trait]
impl EventSource for JsonFileEventSource {
    async fn fetch_events(&self, window: &EventWindow) -> Result<Vec<RawEvent>> {
        let all = self.read_document().await?;
        let total = all.len();

        let events: Vec<RawEvent> = all
            .into_iter()
            .filter(|event| starts_in_window(event, window))
            .take(window.max_results)
            .collect();

        debug!(
            path = %self.path.display(),
            total,
            in_window = events.len(),
            "filtered events file to window"
        );
        info!(
            count = events.len(),
            start = %window.start,
            end = %window.end,
            "loaded events from file"
        );

        Ok(events)
    }
}
