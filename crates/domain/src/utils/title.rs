//! Title and label helpers

use crate::constants::UNTITLED_EVENT;

/// Title to classify, substituting the placeholder for a missing title.
///
/// An empty string is kept as-is; only an absent title gets the placeholder.
///
/// # Examples
///
/// ```
/// use calhours_domain::utils::title::title_or_placeholder;
///
/// assert_eq!(title_or_placeholder(Some("Standup")), "Standup");
/// assert_eq!(title_or_placeholder(None), "Sin título");
/// ```
#[must_use]
pub fn title_or_placeholder(title: Option<&str>) -> String {
    title.unwrap_or(UNTITLED_EVENT).to_string()
}

/// Tag rendered for display: first character upper-cased, rest untouched.
///
/// # Examples
///
/// ```
/// use calhours_domain::utils::title::display_label;
///
/// assert_eq!(display_label("trabajo"), "Trabajo");
/// assert_eq!(display_label("sin-categoría"), "Sin-categoría");
/// assert_eq!(display_label(""), "");
/// ```
#[must_use]
pub fn display_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
