//! Application constants
//!
//! Centralized location for the domain-level defaults used when no
//! configuration overrides them.

// Event field fallbacks
pub const UNTITLED_EVENT: &str = "Sin título";
pub const DEFAULT_TAG: &str = "sin-categoría";

// Duration policy
pub const DEFAULT_FULL_DAY_HOURS: f64 = 8.0;
pub const MIN_DURATION_MINUTES: u32 = 15;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

// Event source request bounds
pub const MAX_EVENTS_PER_REQUEST: usize = 2_500;
pub const DEFAULT_DAYS_RANGE: u32 = 30;

// Display colors
pub const DEFAULT_CHART_PALETTE: [&str; 8] =
    ["#4285f4", "#34a853", "#ea4335", "#fbbc04", "#9c27b0", "#ff9800", "#795548", "#607d8b"];
