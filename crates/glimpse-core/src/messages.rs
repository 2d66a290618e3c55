//! User-facing message catalog
//!
//! All text shown by the exchange is resolved through a catalog injected at
//! construction time, keyed by message identifier. Deployments localize by
//! overriding individual entries; nothing in the exchange builds display
//! strings ad hoc.

use std::collections::HashMap;

/// Identifiers for every message the exchange can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Toast shown when any viewer's request is accepted.
    /// Placeholders: `{actor}`, `{protocol}`.
    ScreenshotRequested,
    /// Accessible label on the pending spinner
    LoadingScreenshot,
    /// Placeholder shown when a capture produced no image
    ScreenshotMissing,
    /// Inline fallback when a delivered image cannot be loaded
    ScreenshotUnavailable,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScreenshotRequested => "screenshot-requested",
            Self::LoadingScreenshot => "loading-screenshot",
            Self::ScreenshotMissing => "screenshot-missing",
            Self::ScreenshotUnavailable => "screenshot-unavailable",
        }
    }
}

/// Resolved lookup table of localized message templates
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Catalog with English defaults
    pub fn new() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            MessageKey::ScreenshotRequested,
            "User {actor} requested a screenshot of the {protocol} endpoint".to_string(),
        );
        templates.insert(MessageKey::LoadingScreenshot, "Loading...".to_string());
        templates.insert(MessageKey::ScreenshotMissing, "(Missing)".to_string());
        templates.insert(
            MessageKey::ScreenshotUnavailable,
            "Cannot load a screenshot".to_string(),
        );
        Self { templates }
    }

    /// Override one entry, e.g. with a translation
    pub fn with_message(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.templates.insert(key, template.into());
        self
    }

    /// Template text for a key. Every key has a default, so this never fails.
    pub fn resolve(&self, key: MessageKey) -> &str {
        self.templates
            .get(&key)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Resolve a template and substitute `{name}` placeholders
    pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let mut text = self.resolve(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_every_key() {
        let catalog = MessageCatalog::new();
        for key in [
            MessageKey::ScreenshotRequested,
            MessageKey::LoadingScreenshot,
            MessageKey::ScreenshotMissing,
            MessageKey::ScreenshotUnavailable,
        ] {
            assert!(!catalog.resolve(key).is_empty(), "missing text for {:?}", key);
        }
    }

    #[test]
    fn test_format_substitutes_placeholders() {
        let catalog = MessageCatalog::new();
        let text = catalog.format(
            MessageKey::ScreenshotRequested,
            &[("actor", "alice"), ("protocol", "https")],
        );
        assert_eq!(
            text,
            "User alice requested a screenshot of the https endpoint"
        );
    }

    #[test]
    fn test_override_replaces_template() {
        let catalog = MessageCatalog::new()
            .with_message(MessageKey::ScreenshotMissing, "(Keine Aufnahme)");
        assert_eq!(
            catalog.resolve(MessageKey::ScreenshotMissing),
            "(Keine Aufnahme)"
        );
        // Other entries keep their defaults
        assert_eq!(catalog.resolve(MessageKey::LoadingScreenshot), "Loading...");
    }

    #[test]
    fn test_format_leaves_unknown_placeholders_alone() {
        let catalog =
            MessageCatalog::new().with_message(MessageKey::ScreenshotRequested, "{actor} / {what}");
        let text = catalog.format(MessageKey::ScreenshotRequested, &[("actor", "bob")]);
        assert_eq!(text, "bob / {what}");
    }
}
