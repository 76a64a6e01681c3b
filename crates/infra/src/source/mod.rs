//! Event source adapters
//!
//! Implementations of the core `EventSource` port.

pub mod json_file;

pub use json_file::JsonFileEventSource;
