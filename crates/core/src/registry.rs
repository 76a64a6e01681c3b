//! Compiled classification policy
//!
//! [`PatternRegistry::compile`] is the single validation point for a
//! [`ClassifierConfig`]: field checks, regex compilation and capture-group
//! arity all happen here, once, before any event is classified.

use std::collections::BTreeMap;

use calhours_domain::{CalHoursError, ClassifierConfig, DurationForm, Result};
use regex::Regex;
use tracing::debug;

use crate::patterns::{MatchMode, PatternSet};

/// Tag patterns carry no payload; capture group 1 is always the tag list.
pub type TagPatterns = PatternSet<()>;

/// Duration patterns carry the form used to read their captures.
pub type DurationPatterns = PatternSet<DurationForm>;

/// Validated, compiled classification policy. Immutable and shareable.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    config: ClassifierConfig,
    tag_patterns: TagPatterns,
    duration_patterns: DurationPatterns,
    color_tags: BTreeMap<String, String>,
    default_tag: String,
}

impl PatternRegistry {
    /// Validate and compile a configuration.
    ///
    /// Mapped tags and the default tag are trimmed and lower-cased so that
    /// every tag the classifier emits has the same shape as an extracted one.
    ///
    /// # Errors
    /// Returns `CalHoursError::Config` for an invalid field, a pattern that
    /// does not compile, or a pattern with too few capture groups.
    pub fn compile(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let mut tag_patterns = PatternSet::new(MatchMode::UnionAll);
        for (index, source) in config.tags.patterns.iter().enumerate() {
            let field = format!("tags.patterns[{index}]");
            let regex = compile_pattern(&field, source, 1)?;
            tag_patterns = tag_patterns.with_pattern(regex, ());
        }

        let mut duration_patterns = PatternSet::new(MatchMode::FirstMatch);
        for (index, duration) in config.hours.duration_patterns.iter().enumerate() {
            let field = format!("hours.duration_patterns[{index}]");
            let groups = match duration.form {
                DurationForm::Decimal => 1,
                DurationForm::HoursMinutes => 2,
            };
            let regex = compile_pattern(&field, &duration.pattern, groups)?;
            duration_patterns = duration_patterns.with_pattern(regex, duration.form);
        }

        let color_tags = config
            .color_tag_map
            .iter()
            .map(|(color_id, tag)| (color_id.trim().to_string(), normalize_tag(tag)))
            .collect();
        let default_tag = normalize_tag(&config.tags.default_tag);

        debug!(
            tag_patterns = tag_patterns.len(),
            duration_patterns = duration_patterns.len(),
            color_tags = config.color_tag_map.len(),
            "compiled pattern registry"
        );

        Ok(Self { config, tag_patterns, duration_patterns, color_tags, default_tag })
    }

    /// The configuration this registry was compiled from.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    #[must_use]
    pub fn tag_patterns(&self) -> &TagPatterns {
        &self.tag_patterns
    }

    #[must_use]
    pub fn duration_patterns(&self) -> &DurationPatterns {
        &self.duration_patterns
    }

    /// Tag mapped to a calendar `colorId`, if any.
    #[must_use]
    pub fn color_tag(&self, color_id: &str) -> Option<&str> {
        self.color_tags.get(color_id.trim()).map(String::as_str)
    }

    #[must_use]
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    #[must_use]
    pub fn full_day_hours(&self) -> f64 {
        self.config.hours.default_full_day_hours
    }

    #[must_use]
    pub fn min_duration_hours(&self) -> f64 {
        self.config.hours.min_duration_hours()
    }

    /// Display color for a tag; unmapped tags get the first palette entry.
    #[must_use]
    pub fn tag_color(&self, tag: &str) -> String {
        self.config.colors.tag_color(tag).unwrap_or_default().to_string()
    }
}

/// Trim and lower-case a tag the same way extracted tags are.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

fn compile_pattern(field: &str, source: &str, min_groups: usize) -> Result<Regex> {
    let regex = Regex::new(source)
        .map_err(|e| CalHoursError::Config(format!("{field}: invalid pattern: {e}")))?;

    // captures_len counts the implicit whole-match group
    let groups = regex.captures_len().saturating_sub(1);
    if groups < min_groups {
        return Err(CalHoursError::Config(format!(
            "{field}: pattern '{source}' needs at least {min_groups} capture group(s), found {groups}"
        )));
    }
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use calhours_domain::DurationPattern;

    use super::*;

    #[test]
    fn test_compile_defaults() {
        let registry = PatternRegistry::compile(ClassifierConfig::default()).expect("defaults");
        assert_eq!(registry.tag_patterns().len(), 3);
        assert_eq!(registry.tag_patterns().mode(), MatchMode::UnionAll);
        assert_eq!(registry.duration_patterns().len(), 4);
        assert_eq!(registry.duration_patterns().mode(), MatchMode::FirstMatch);
        assert_eq!(registry.default_tag(), "sin-categoría");
        assert_eq!(registry.color_tag("6"), Some("trabajo"));
        assert_eq!(registry.color_tag("11"), None);
    }

    #[test]
    fn test_invalid_regex_is_config_error() {
        let mut config = ClassifierConfig::default();
        config.tags.patterns.push("[unclosed".to_string());

        let err = PatternRegistry::compile(config).expect_err("invalid regex");
        assert!(matches!(err, CalHoursError::Config(_)));
        assert!(err.to_string().contains("tags.patterns[3]"));
    }

    #[test]
    fn test_tag_pattern_without_group_rejected() {
        let mut config = ClassifierConfig::default();
        config.tags.patterns = vec![r"#\w+".to_string()];

        let err = PatternRegistry::compile(config).expect_err("no capture group");
        assert!(err.to_string().contains("capture group"));
    }

    #[test]
    fn test_hours_minutes_needs_two_groups() {
        let mut config = ClassifierConfig::default();
        config.hours.duration_patterns = vec![DurationPattern::hours_minutes(r"(\d+):\d+")];

        assert!(PatternRegistry::compile(config).is_err());
    }

    #[test]
    fn test_empty_pattern_lists_compile() {
        let mut config = ClassifierConfig::default();
        config.tags.patterns.clear();
        config.hours.duration_patterns.clear();

        let registry = PatternRegistry::compile(config).expect("empty lists are allowed");
        assert!(registry.tag_patterns().is_empty());
        assert!(registry.duration_patterns().is_empty());
    }

    #[test]
    fn test_mapped_tags_are_normalized() {
        let mut config = ClassifierConfig::default();
        config.color_tag_map.insert("9".to_string(), "  Ventas ".to_string());
        config.tags.default_tag = "Otros".to_string();

        let registry = PatternRegistry::compile(config).expect("valid");
        assert_eq!(registry.color_tag("9"), Some("ventas"));
        assert_eq!(registry.default_tag(), "otros");
    }

    #[test]
    fn test_tag_color_fallback() {
        let registry = PatternRegistry::compile(ClassifierConfig::default()).expect("defaults");
        assert_eq!(registry.tag_color("personal"), "#34a853");
        assert_eq!(registry.tag_color("desconocido"), "#4285f4");
    }
}
