//! Classification policy configuration
//!
//! Everything that decides how events are tagged and how their hours are
//! counted lives here as plain data: tag patterns, duration patterns, the
//! calendar `colorId` → tag map, thresholds, and display colors. The core
//! compiles this into matchers once; nothing here executes a pattern.
//!
//! Every struct uses `#[serde(default)]`, so a configuration file only needs
//! the fields it wants to change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CHART_PALETTE, DEFAULT_FULL_DAY_HOURS, DEFAULT_TAG, MINUTES_PER_HOUR,
    MIN_DURATION_MINUTES,
};
use crate::errors::{CalHoursError, Result};

/// How the captures of a duration pattern are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationForm {
    /// Capture group 1 is a decimal hour count (`3.5h`).
    #[default]
    Decimal,
    /// Capture group 1 is hours, group 2 is minutes (`1:30`).
    HoursMinutes,
}

crate::impl_domain_enum_conversions!(DurationForm {
    Decimal => "decimal",
    HoursMinutes => "hours_minutes",
});

/// A single duration-detection pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPattern {
    /// Regular expression source.
    pub pattern: String,
    /// How the captures are converted to hours.
    #[serde(default)]
    pub form: DurationForm,
}

impl DurationPattern {
    /// Pattern whose first capture is a decimal hour count.
    pub fn decimal(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), form: DurationForm::Decimal }
    }

    /// Pattern whose captures are hours and minutes.
    pub fn hours_minutes(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), form: DurationForm::HoursMinutes }
    }
}

/// Tag detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Regex sources; capture group 1 holds a comma-separated tag list.
    pub patterns: Vec<String>,
    /// Tag used when neither a manual nor a color tag is found.
    pub default_tag: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                r"\[([^\]]+)\]".to_string(),
                r"#(\w+)".to_string(),
                r"(?i)tags?:\s*([^,\n]+)".to_string(),
            ],
            default_tag: DEFAULT_TAG.to_string(),
        }
    }
}

/// Duration detection and filtering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursConfig {
    /// Ordered override patterns; the first match wins.
    pub duration_patterns: Vec<DurationPattern>,
    /// Hours credited per day of an all-day event.
    pub default_full_day_hours: f64,
    /// Inclusive floor; shorter events are discarded.
    pub min_duration_minutes: u32,
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            duration_patterns: vec![
                DurationPattern::decimal(r"(?i)(\d+(?:\.\d+)?)\s*h(?:oras?)?"),
                DurationPattern::decimal(r"(?i)(\d+(?:\.\d+)?)\s*hrs?"),
                DurationPattern::hours_minutes(r"(\d+)\s*:\s*(\d+)"),
                DurationPattern::decimal(r"(?i)duración:\s*(\d+(?:\.\d+)?)"),
            ],
            default_full_day_hours: DEFAULT_FULL_DAY_HOURS,
            min_duration_minutes: MIN_DURATION_MINUTES,
        }
    }
}

impl HoursConfig {
    /// Minimum duration expressed in hours.
    #[must_use]
    pub fn min_duration_hours(&self) -> f64 {
        f64::from(self.min_duration_minutes) / MINUTES_PER_HOUR
    }
}

/// Display colors for tags and charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Tag → CSS color.
    pub tags: BTreeMap<String, String>,
    /// Chart palette; entry 0 doubles as the fallback tag color.
    pub palette: Vec<String>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let tags = [
            ("trabajo", "#F4511E"),
            ("personal", "#34a853"),
            ("formacion", "#ea4335"),
            ("reuniones", "#fbbc04"),
            ("proyecto", "#9c27b0"),
            (DEFAULT_TAG, "#607d8b"),
        ]
        .into_iter()
        .map(|(tag, color)| (tag.to_string(), color.to_string()))
        .collect();

        Self { tags, palette: DEFAULT_CHART_PALETTE.iter().map(ToString::to_string).collect() }
    }
}

impl ColorConfig {
    /// Palette entry for a chart series, cycling when the palette runs out.
    #[must_use]
    pub fn chart_color(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(index % self.palette.len()).map(String::as_str)
    }

    /// Color for a tag, falling back to the first palette entry.
    #[must_use]
    pub fn tag_color(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str).or_else(|| self.chart_color(0))
    }
}

/// Complete classification policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub tags: TagConfig,
    pub hours: HoursConfig,
    /// Calendar `colorId` → tag, consulted only when no manual tag exists.
    pub color_tag_map: BTreeMap<String, String>,
    pub colors: ColorConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let color_tag_map = [
            ("2", "personal"),
            ("3", "formacion"),
            ("4", "proyecto"),
            ("5", "reuniones"),
            ("6", "trabajo"),
        ]
        .into_iter()
        .map(|(color_id, tag)| (color_id.to_string(), tag.to_string()))
        .collect();

        Self {
            tags: TagConfig::default(),
            hours: HoursConfig::default(),
            color_tag_map,
            colors: ColorConfig::default(),
        }
    }
}

impl ClassifierConfig {
    /// Validate the non-pattern fields.
    ///
    /// Pattern sources are checked when the core compiles them. Empty pattern
    /// lists are accepted: they simply disable manual tags or text overrides.
    ///
    /// # Errors
    /// Returns `CalHoursError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.tags.default_tag, "tags.default_tag")?;

        let full_day = self.hours.default_full_day_hours;
        if !full_day.is_finite() || full_day < 0.0 {
            return Err(CalHoursError::Config(format!(
                "hours.default_full_day_hours must be a finite value >= 0 (got {full_day})"
            )));
        }

        if self.colors.palette.is_empty() {
            return Err(CalHoursError::Config("colors.palette must not be empty".to_string()));
        }
        for color in &self.colors.palette {
            validate_non_empty(color, "colors.palette[]")?;
        }

        for (color_id, tag) in &self.color_tag_map {
            validate_non_empty(color_id, "color_tag_map key")?;
            validate_non_empty(tag, &format!("color_tag_map[{color_id}]"))?;
        }

        for pattern in &self.tags.patterns {
            validate_non_empty(pattern, "tags.patterns[]")?;
        }
        for duration in &self.hours.duration_patterns {
            validate_non_empty(&duration.pattern, "hours.duration_patterns[].pattern")?;
        }

        Ok(())
    }
}

fn validate_non_empty(value: &str, field_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalHoursError::Config(format!("{field_name} must not be empty")));
    }
    Ok(())
}
