//! Tag markup removal for display titles
//!
//! The `[tag, tag]` convention is fixed markup, independent of the configured
//! tag patterns: even when bracket tags are not used for classification, the
//! brackets are stripped from the title shown to users.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Bracketed tag list such as `[trabajo, cliente]`
    #[allow(clippy::expect_used)]
    static ref TAG_MARKUP: Regex =
        Regex::new(r"\[([^\]]+)\]").expect("TAG_MARKUP should compile - this is a bug");
}

/// Remove every `[...]` group and trim the result.
///
/// Empty brackets `[]` are kept, matching the markup pattern.
///
/// # Examples
///
/// ```
/// use calhours_core::utils::markup::strip_tag_markup;
///
/// assert_eq!(strip_tag_markup("[trabajo] Standup"), "Standup");
/// assert_eq!(strip_tag_markup("Review [a, b] notes"), "Review  notes");
/// ```
#[must_use]
pub fn strip_tag_markup(title: &str) -> String {
    match TAG_MARKUP.replace_all(title, "") {
        Cow::Borrowed(unchanged) => unchanged.trim().to_string(),
        Cow::Owned(stripped) => stripped.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_markup() {
        assert_eq!(strip_tag_markup("[trabajo] Standup"), "Standup");
    }

    #[test]
    fn test_strip_multiple_groups() {
        assert_eq!(strip_tag_markup("[a] Sprint [b,c]"), "Sprint");
    }

    #[test]
    fn test_title_without_markup_is_trimmed() {
        assert_eq!(strip_tag_markup("  Planning  "), "Planning");
    }

    #[test]
    fn test_empty_brackets_are_kept() {
        assert_eq!(strip_tag_markup("[] Planning"), "[] Planning");
    }

    #[test]
    fn test_only_markup_becomes_empty() {
        assert_eq!(strip_tag_markup("[personal]"), "");
    }
}
