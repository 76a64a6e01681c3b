//! # Calhours Core
//!
//! Pure classification and aggregation logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Pattern sets and the compiled pattern registry
//! - Tag extraction, the tag fallback chain and duration resolution
//! - The event classifier and reporting aggregates
//! - The `EventSource` port and the report service built on it
//!
//! ## Architecture Principles
//! - Only depends on `calhours-domain`
//! - No file, network or platform code
//! - Event retrieval only via the `EventSource` trait

pub mod aggregator;
pub mod classifier;
pub mod duration;
pub mod fallback;
pub mod patterns;
pub mod registry;
pub mod report;
pub mod tags;
pub mod utils;

pub use aggregator::{Aggregation, EventSort, HoursAccumulator};
pub use classifier::{ClassificationBatch, EventClassifier, RejectReason, Rejection};
pub use duration::resolve_duration;
pub use fallback::{ColorTag, DefaultTag, ManualTags, TagContext, TagResolver, TagStrategy};
pub use patterns::{MatchMode, PatternSet};
pub use registry::PatternRegistry;
pub use report::{EventSource, HoursReport, HoursReportService};
pub use tags::extract_tags;
