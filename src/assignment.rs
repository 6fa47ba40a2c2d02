//! Reading and writing the style attached to a content item.
//!
//! Styles are stored as taxonomy terms with the `post-style-` prefix. This
//! module is the only place that adds or strips it.

use serde::Serialize;

use crate::config::{PostStylesConfig, RenderContext};
use crate::error::{PostStylesError, Result};
use crate::registry::StyleRegistry;
use crate::repository::{ContentRepository, ItemId, TermId};
use crate::style::{TERM_PREFIX, sanitize_key, strip_term_prefix};

const STANDARD: &str = "standard";
const QUERY_VAR: &str = "post_style=";

/// Value of the "no style" choice in [`StyleChoices`].
pub const NO_STYLE_CHOICE: &str = "0";

/// Style assignment bound to a registry and site configuration.
#[derive(Debug, Clone, Copy)]
pub struct StyleAssignment<'a> {
    registry: &'a StyleRegistry,
    config: &'a PostStylesConfig,
}

/// The style picker model: every selectable style and the current choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleChoices {
    /// `(key, label)` pairs, "standard" excluded
    pub options: Vec<(String, String)>,

    /// Selected key, or [`NO_STYLE_CHOICE`]
    pub selected: String,
}

impl<'a> StyleAssignment<'a> {
    pub fn new(registry: &'a StyleRegistry, config: &'a PostStylesConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the item's style.
    ///
    /// `None` when the item doesn't resolve. Items whose post type doesn't
    /// support styles, or that carry no style term, report their post type.
    pub fn get_style(&self, repo: &dyn ContentRepository, id: ItemId) -> Option<String> {
        let item = repo.item(id)?;
        if !self.config.supports_styles(&item.post_type) {
            return Some(item.post_type);
        }
        Some(self.assigned_style(repo, id).unwrap_or(item.post_type))
    }

    /// Assigns `key` to the item, replacing any previous style.
    ///
    /// The key is sanitized first. Empty, "standard" and unregistered keys
    /// clear the assignment. Returns the affected term ids.
    ///
    /// # Errors
    ///
    /// [`PostStylesError::InvalidPost`] if the item doesn't resolve. Nothing
    /// is written in that case.
    pub fn set_style(
        &self,
        repo: &mut dyn ContentRepository,
        id: ItemId,
        key: &str,
    ) -> Result<Vec<TermId>> {
        if repo.item(id).is_none() {
            return Err(PostStylesError::invalid_post(id));
        }

        let key = sanitize_key(key);
        let slugs = if key.is_empty() || key == STANDARD || !self.registry.contains(&key) {
            tracing::debug!(id, key = key.as_str(), "clearing post style");
            Vec::new()
        } else {
            tracing::debug!(id, key = key.as_str(), "assigning post style");
            vec![format!("{TERM_PREFIX}{key}")]
        };
        Ok(repo.set_style_terms(id, &slugs))
    }

    /// Returns `true` if the item carries any of `keys`, or any style at all
    /// when `keys` is empty.
    pub fn has_style(&self, repo: &dyn ContentRepository, id: ItemId, keys: &[&str]) -> bool {
        let terms = repo.style_terms(id);
        if keys.is_empty() {
            return !terms.is_empty();
        }
        let wanted: Vec<String> = keys
            .iter()
            .map(|key| format!("{TERM_PREFIX}{}", sanitize_key(key)))
            .collect();
        terms.iter().any(|term| wanted.contains(term))
    }

    /// Public archive link for a style, with the storage prefix removed from
    /// the query value. `None` if no item was ever given that style.
    pub fn style_link(&self, repo: &dyn ContentRepository, key: &str) -> Option<String> {
        let slug = format!("{TERM_PREFIX}{}", sanitize_key(key));
        repo.term_link(&slug)
            .map(|link| link.replace(&format!("{QUERY_VAR}{TERM_PREFIX}"), QUERY_VAR))
    }

    /// CSS classes for the item in a listing.
    ///
    /// Empty in single views and for post types without styles. Items without
    /// a style get the standard classes.
    pub fn post_classes(
        &self,
        repo: &dyn ContentRepository,
        id: ItemId,
        context: &RenderContext,
    ) -> Vec<String> {
        let Some(item) = repo.item(id) else {
            return Vec::new();
        };
        if context.single_view || !self.config.supports_styles(&item.post_type) {
            return Vec::new();
        }

        let style = self
            .assigned_style(repo, id)
            .map(|key| sanitize_key(&key))
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| STANDARD.to_string());
        vec![format!("post-style-{style}"), format!("post-format-{style}")]
    }

    /// Maps a public `post_style` query value to its stored slug. Unknown
    /// values pass through.
    ///
    /// ```rust
    /// use poststyles::PostStyles;
    ///
    /// let styles = PostStyles::builder().build();
    /// let assignment = styles.assignment();
    /// assert_eq!(assignment.rewrite_query_var("quote"), "post-style-quote");
    /// assert_eq!(assignment.rewrite_query_var("nope"), "nope");
    /// ```
    pub fn rewrite_query_var(&self, value: &str) -> String {
        if self.registry.contains(value) {
            format!("{TERM_PREFIX}{value}")
        } else {
            value.to_string()
        }
    }

    /// Display name for a stored term slug.
    pub fn term_display_name(&self, slug: &str) -> &'a str {
        self.registry.resolve_label(strip_term_prefix(slug))
    }

    /// Builds the style picker for an item.
    pub fn style_choices(&self, repo: &dyn ContentRepository, id: ItemId) -> StyleChoices {
        let options: Vec<(String, String)> = self
            .registry
            .iter()
            .filter(|(key, _)| *key != STANDARD)
            .map(|(key, label)| (key.to_string(), label.to_string()))
            .collect();

        let selected = self
            .get_style(repo, id)
            .filter(|style| options.iter().any(|(key, _)| key == style))
            .unwrap_or_else(|| NO_STYLE_CHOICE.to_string());

        StyleChoices { options, selected }
    }

    fn assigned_style(&self, repo: &dyn ContentRepository, id: ItemId) -> Option<String> {
        repo.style_terms(id)
            .first()
            .map(|slug| strip_term_prefix(slug).to_string())
    }
}
