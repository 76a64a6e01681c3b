//! Manual tag extraction from event text

use std::collections::HashSet;

use crate::registry::{normalize_tag, PatternRegistry};

/// Extract manual tags from an event's title and description.
///
/// Every tag pattern contributes every match. Capture group 1 is split on
/// commas; each candidate is trimmed and lower-cased, empty candidates are
/// dropped and duplicates keep their first position.
#[must_use]
pub fn extract_tags(registry: &PatternRegistry, title: &str, description: &str) -> Vec<String> {
    let text = format!("{title} {description}");

    let captured = registry
        .tag_patterns()
        .evaluate(&text, |(), caps| caps.get(1).map(|m| m.as_str().to_string()));

    let mut seen = HashSet::new();
    captured
        .iter()
        .flat_map(|list| list.split(','))
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
