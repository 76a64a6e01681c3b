//! # Calhours Domain
//!
//! Data types and policy configuration for calendar hour reporting.
//!
//! This crate contains:
//! - Raw and normalized event types, aggregation outputs, fetch windows
//! - `ClassifierConfig` with its defaults and validation
//! - Domain error types and Result definitions
//! - Domain constants and string helpers
//!
//! ## Architecture
//! - No dependencies on other Calhours crates
//! - No I/O, no pattern execution

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{ClassifierConfig, ColorConfig, DurationForm, DurationPattern, HoursConfig, TagConfig};
pub use errors::{CalHoursError, Result};
pub use types::*;
