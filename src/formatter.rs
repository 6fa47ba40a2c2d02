//! The [`PostStyles`] context and its builder.
//!
//! Everything that was process-wide state in a plugin setting lives here: the
//! style registry, the chat dialects, the hooks and the site configuration.
//! Build one value at startup and share it by reference (or behind an `Arc`).
//!
//! # Example
//!
//! ```rust
//! use poststyles::prelude::*;
//!
//! let styles = PostStyles::builder()
//!     .config(PostStylesConfig::new().with_formatting_enabled(true))
//!     .build();
//!
//! let mut repo = MemoryRepository::new();
//! repo.insert(ContentItem::new(1, "Intro <blockquote>Hi</blockquote>"));
//! styles.set_style(&mut repo, 1, "quote").unwrap();
//!
//! let html = styles.format_content(&repo, "Intro <blockquote>Hi</blockquote>", 1, &RenderContext::listing());
//! assert_eq!(html, "<blockquote>Hi</blockquote>");
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::assignment::StyleAssignment;
use crate::chat::ChatDialects;
use crate::config::{PostStylesConfig, RenderContext};
use crate::error::Result;
use crate::extract::{ExtractContext, extract};
use crate::hooks::Hooks;
use crate::registry::StyleRegistry;
use crate::render::{BasicRenderer, Renderer};
use crate::repository::{ContentRepository, ItemId, TermId};
use crate::style::StyleKey;

/// Post style formatting context.
pub struct PostStyles {
    registry: StyleRegistry,
    dialects: ChatDialects,
    hooks: Hooks,
    config: PostStylesConfig,
    renderer: Box<dyn Renderer>,
}

impl PostStyles {
    /// Starts building a context with the built-in styles and chat dialects.
    pub fn builder() -> PostStylesBuilder {
        PostStylesBuilder::new()
    }

    /// A context with default settings. Formatting is off.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn dialects(&self) -> &ChatDialects {
        &self.dialects
    }

    pub fn config(&self) -> &PostStylesConfig {
        &self.config
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// Style assignment bound to this context's registry and configuration.
    pub fn assignment(&self) -> StyleAssignment<'_> {
        StyleAssignment::new(&self.registry, &self.config)
    }

    // ------------------------------------------------------------------
    // Template queries
    // ------------------------------------------------------------------

    /// See [`StyleAssignment::get_style`].
    pub fn get_style(&self, repo: &dyn ContentRepository, id: ItemId) -> Option<String> {
        self.assignment().get_style(repo, id)
    }

    /// See [`StyleAssignment::has_style`].
    pub fn has_style(&self, repo: &dyn ContentRepository, id: ItemId, keys: &[&str]) -> bool {
        self.assignment().has_style(repo, id, keys)
    }

    /// See [`StyleAssignment::set_style`].
    ///
    /// # Errors
    ///
    /// Fails with `InvalidPost` if the item doesn't resolve.
    pub fn set_style(
        &self,
        repo: &mut dyn ContentRepository,
        id: ItemId,
        key: &str,
    ) -> Result<Vec<TermId>> {
        self.assignment().set_style(repo, id, key)
    }

    /// See [`StyleAssignment::style_link`].
    pub fn style_link(&self, repo: &dyn ContentRepository, key: &str) -> Option<String> {
        self.assignment().style_link(repo, key)
    }

    /// Display label for a style key.
    pub fn style_label(&self, key: &str) -> &str {
        self.registry.resolve_label(key)
    }

    // ------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------

    /// The "enabled" setting after the formatting hooks.
    pub fn formatting_enabled(&self) -> bool {
        self.hooks.apply_formatting(self.config.formatting_enabled)
    }

    /// Returns `true` if formatting applies in `context`.
    pub fn is_active(&self, context: &RenderContext) -> bool {
        !context.single_view && self.formatting_enabled()
    }

    /// Replaces `content` with the fragment its item's style calls for.
    ///
    /// Content is returned unchanged in single views or when formatting is
    /// disabled. Otherwise the extractor for the item's style runs and the
    /// content hooks see the result.
    pub fn format_content(
        &self,
        repo: &dyn ContentRepository,
        content: &str,
        id: ItemId,
        context: &RenderContext,
    ) -> String {
        if !self.is_active(context) {
            return content.to_string();
        }

        let style = self
            .get_style(repo, id)
            .map(|slug| StyleKey::from_slug(&slug))
            .unwrap_or_default();
        tracing::debug!(id, style = style.as_str(), "formatting post content");

        let ctx = ExtractContext {
            item: id,
            repository: repo,
            renderer: self.renderer(),
            dialects: &self.dialects,
        };
        let formatted = extract(&style, content, &ctx);
        self.hooks.apply_content(formatted, &style)
    }

    /// Replaces an excerpt with the formatted full body of a styled item,
    /// with media shortcodes expanded.
    ///
    /// Items without a style keep their excerpt.
    pub fn format_excerpt(
        &self,
        repo: &dyn ContentRepository,
        excerpt: &str,
        id: ItemId,
        context: &RenderContext,
    ) -> String {
        if !self.is_active(context) || !self.has_style(repo, id, &[]) {
            return excerpt.to_string();
        }
        let Some(item) = repo.item(id) else {
            return excerpt.to_string();
        };

        tracing::debug!(id, "formatting excerpt from full body");
        let formatted = self.format_content(repo, &item.content, id, context);
        self.renderer.expand_shortcodes(&formatted)
    }
}

impl Default for PostStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PostStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStyles")
            .field("registry", &self.registry)
            .field("dialects", &self.dialects.names())
            .field("hooks", &self.hooks)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PostStyles`].
pub struct PostStylesBuilder {
    dialects: ChatDialects,
    hooks: Hooks,
    config: PostStylesConfig,
    renderer: Box<dyn Renderer>,
}

impl PostStylesBuilder {
    pub fn new() -> Self {
        Self {
            dialects: ChatDialects::with_builtins(),
            hooks: Hooks::new(),
            config: PostStylesConfig::default(),
            renderer: Box::new(BasicRenderer),
        }
    }

    /// Sets the site configuration.
    #[must_use]
    pub fn config(mut self, config: PostStylesConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the media renderer (default: [`BasicRenderer`]).
    #[must_use]
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Adds a chat dialect. It takes priority over every dialect registered
    /// before it, built-ins included.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` naming the dialect if either pattern fails
    /// to compile.
    ///
    /// ```rust
    /// use poststyles::PostStyles;
    ///
    /// let styles = PostStyles::builder()
    ///     .register_chat_style("IRC", r"^<(\w+)>", r"^<")
    ///     .unwrap()
    ///     .build();
    /// assert_eq!(styles.dialects().names()[0], "IRC");
    ///
    /// assert!(PostStyles::builder().register_chat_style("Bad", "(", ":").is_err());
    /// ```
    pub fn register_chat_style(mut self, name: &str, newline: &str, delimiter: &str) -> Result<Self> {
        self.dialects.register(name, newline, delimiter)?;
        Ok(self)
    }

    /// Adds a filter over the style label table.
    #[must_use]
    pub fn label_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&mut IndexMap<String, String>) + Send + Sync + 'static,
    {
        self.hooks.add_label_filter(filter);
        self
    }

    /// Adds a filter over the "formatting enabled" decision.
    #[must_use]
    pub fn formatting_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        self.hooks.add_formatting_filter(filter);
        self
    }

    /// Adds a filter over formatted content.
    #[must_use]
    pub fn content_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(String, &StyleKey) -> String + Send + Sync + 'static,
    {
        self.hooks.add_content_filter(filter);
        self
    }

    /// Builds the context. Label filters run here, once.
    pub fn build(self) -> PostStyles {
        let registry = StyleRegistry::from_hooks(&self.hooks);
        tracing::debug!(
            styles = registry.len(),
            dialects = self.dialects.len(),
            "post styles ready"
        );
        PostStyles {
            registry,
            dialects: self.dialects,
            hooks: self.hooks,
            config: self.config,
            renderer: self.renderer,
        }
    }
}

impl Default for PostStylesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PostStylesBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStylesBuilder")
            .field("dialects", &self.dialects.names())
            .field("hooks", &self.hooks)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
