//! # Calhours Infrastructure
//!
//! Impure adapters around the classification core.
//!
//! This crate contains:
//! - Configuration loading (TOML/JSON files plus environment overrides)
//! - Tracing subscriber setup
//! - A file-backed implementation of the core `EventSource` port
//!
//! ## Architecture
//! - Implements traits defined in `calhours-core`
//! - Depends on `calhours-domain` and `calhours-core`
//! - Contains all code that touches the filesystem or process environment

pub mod config;
pub mod errors;
pub mod logging;
pub mod source;

// Re-export commonly used items
pub use errors::InfraError;
pub use logging::{LogFormat, LoggingConfig};
pub use source::JsonFileEventSource;
