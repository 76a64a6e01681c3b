//! Tag fallback chain
//!
//! An event's tags come from the first strategy that has an opinion:
//! manual tags written in the text, then the tag mapped to the event's
//! calendar color, then the configured default. Each link is a
//! [`TagStrategy`]; [`TagResolver`] walks them in order.

use crate::registry::PatternRegistry;

/// What a strategy may look at when choosing tags.
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    /// Tags extracted from the title and description.
    pub manual_tags: &'a [String],
    pub color_id: Option<&'a str>,
}

/// One link of the fallback chain.
pub trait TagStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Tags for this event, or `None` to defer to the next strategy.
    fn resolve(&self, context: &TagContext<'_>, registry: &PatternRegistry) -> Option<Vec<String>>;
}

/// Tags written in the event text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTags;

impl TagStrategy for ManualTags {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn resolve(&self, context: &TagContext<'_>, _registry: &PatternRegistry) -> Option<Vec<String>> {
        (!context.manual_tags.is_empty()).then(|| context.manual_tags.to_vec())
    }
}

/// Tag mapped from the calendar color.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTag;

impl TagStrategy for ColorTag {
    fn name(&self) -> &'static str {
        "color"
    }

    fn resolve(&self, context: &TagContext<'_>, registry: &PatternRegistry) -> Option<Vec<String>> {
        context.color_id.and_then(|id| registry.color_tag(id)).map(|tag| vec![tag.to_string()])
    }
}

/// The configured default tag. Always has an opinion.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTag;

impl TagStrategy for DefaultTag {
    fn name(&self) -> &'static str {
        "default"
    }

    fn resolve(&self, _context: &TagContext<'_>, registry: &PatternRegistry) -> Option<Vec<String>> {
        Some(vec![registry.default_tag().to_string()])
    }
}

/// Outcome of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTags {
    /// Never empty.
    pub tags: Vec<String>,
    /// Name of the strategy that produced `tags`.
    pub strategy: &'static str,
}

impl ResolvedTags {
    /// First tag of the list.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.tags.first().map_or("", String::as_str)
    }
}

/// Ordered list of strategies; the first non-empty answer wins.
pub struct TagResolver {
    strategies: Vec<Box<dyn TagStrategy>>,
}

impl Default for TagResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for TagResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.strategies.iter().map(|s| s.name())).finish()
    }
}

impl TagResolver {
    /// Manual tags, then color tag, then default tag.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![Box::new(ManualTags), Box::new(ColorTag), Box::new(DefaultTag)])
    }

    #[must_use]
    pub fn new(strategies: Vec<Box<dyn TagStrategy>>) -> Self {
        Self { strategies }
    }

    /// Strategy names in evaluation order.
    pub fn strategy_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|s| s.name())
    }

    /// Walk the chain. If no strategy answers, the registry's default tag is
    /// used so the result is never empty.
    #[must_use]
    pub fn resolve(&self, context: &TagContext<'_>, registry: &PatternRegistry) -> ResolvedTags {
        self.strategies
            .iter()
            .find_map(|strategy| {
                strategy
                    .resolve(context, registry)
                    .filter(|tags| !tags.is_empty())
                    .map(|tags| ResolvedTags { tags, strategy: strategy.name() })
            })
            .unwrap_or_else(|| ResolvedTags {
                tags: vec![registry.default_tag().to_string()],
                strategy: DefaultTag.name(),
            })
    }
}
