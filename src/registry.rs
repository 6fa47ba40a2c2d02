//! Style slug → display label table.
//!
//! The registry keeps insertion order and always lists "standard" first.
//!
//! ```rust
//! use poststyles::registry::StyleRegistry;
//!
//! let registry = StyleRegistry::with_builtins();
//! assert_eq!(registry.resolve_label("link-list"), "List");
//! assert_eq!(registry.resolve_label(""), "Standard");
//! assert_eq!(registry.resolve_label("unknown"), "");
//! assert_eq!(registry.list_style_keys()[0], "standard");
//! ```

use indexmap::IndexMap;

use crate::hooks::Hooks;
use crate::style::StyleKey;

const STANDARD: &str = "standard";

/// Ordered mapping from style slugs to human-readable labels.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    labels: IndexMap<String, String>,
}

impl StyleRegistry {
    /// Creates a registry containing only "standard".
    pub fn new() -> Self {
        let mut labels = IndexMap::new();
        labels.insert(STANDARD.to_string(), "Standard".to_string());
        Self { labels }
    }

    /// Creates a registry with every built-in style.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (key, label) in builtin_labels() {
            registry.register_style(key, label);
        }
        registry
    }

    /// Builds the built-in table, runs the label hooks over it, then puts
    /// "standard" back in front.
    pub fn from_hooks(hooks: &Hooks) -> Self {
        let mut strings: IndexMap<String, String> = builtin_labels()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        hooks.apply_labels(&mut strings);

        let mut registry = Self::new();
        for (key, label) in strings {
            if key != STANDARD {
                registry.register_style(&key, &label);
            }
        }
        registry
    }

    /// Adds or overwrites the label for `key`. Empty keys are ignored.
    pub fn register_style(&mut self, key: &str, label: &str) {
        if key.is_empty() {
            return;
        }
        tracing::trace!(key, label, "registering post style");
        self.labels.insert(key.to_string(), label.to_string());
    }

    /// Returns the label for `key`: the standard label for an empty key,
    /// an empty string for unknown keys.
    pub fn resolve_label(&self, key: &str) -> &str {
        if key.is_empty() {
            return self.standard_label();
        }
        self.labels.get(key).map_or("", String::as_str)
    }

    /// Returns every registered key, "standard" first.
    pub fn list_style_keys(&self) -> Vec<&str> {
        self.labels.keys().map(String::as_str).collect()
    }

    /// Iterates over `(key, label)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    /// Returns `true` if `key` is registered, as a typed key.
    pub fn contains_key(&self, key: &StyleKey) -> bool {
        self.contains(key.as_str())
    }

    /// Number of registered styles, "standard" included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn standard_label(&self) -> &str {
        self.labels.get(STANDARD).map_or("Standard", String::as_str)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn builtin_labels() -> Vec<(&'static str, &'static str)> {
    vec![
        ("aside", "Aside"),
        ("image", "Image"),
        ("video", "Video"),
        ("audio", "Audio"),
        ("playlist", "Playlist"),
        ("quote", "Quote"),
        ("link", "Link"),
        ("link-list", "List"),
        ("gallery", "Gallery"),
        ("embed", "Embed"),
        ("no-photo", "No Photo"),
        ("chat", "Chat"),
    ]
}
