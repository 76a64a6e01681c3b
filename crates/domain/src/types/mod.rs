//! Domain types for calendar hour reporting
//!
//! - [`event`]: raw events as delivered by an event source
//! - [`normalized`]: classified, reportable events
//! - [`stats`]: aggregation outputs
//! - [`window`]: the time window requested from an event source

pub mod event;
pub mod normalized;
pub mod stats;
pub mod window;

pub use event::{EventMoment, EventTime, MalformedTime, RawEvent};
pub use normalized::NormalizedEvent;
pub use stats::{DailyHours, DateRange, HoursSummary, TagTotal};
pub use window::EventWindow;
