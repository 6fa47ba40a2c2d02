//! Content repository abstraction.
//!
//! Post storage, taxonomy terms and post meta belong to the host platform.
//! The core only talks to them through [`ContentRepository`].
//! [`MemoryRepository`] is a small in-process implementation used by the CLI
//! and tests.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a content item.
pub type ItemId = u64;

/// Identifier of a stored taxonomy term.
pub type TermId = u64;

/// A post as seen by the core: id, type and raw body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,

    /// Post type, e.g. "post" or "page".
    pub post_type: String,

    /// Raw body text (HTML).
    pub content: String,
}

impl ContentItem {
    /// Creates a new item of type "post".
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            post_type: "post".to_string(),
            content: content.into(),
        }
    }

    /// Sets the post type.
    #[must_use]
    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }
}

/// Storage the core reads styles, meta and galleries from.
///
/// Term slugs are exchanged in stored form (`post-style-quote`).
pub trait ContentRepository {
    /// Resolves an item, `None` if it doesn't exist.
    fn item(&self, id: ItemId) -> Option<ContentItem>;

    /// Style term slugs attached to the item, in storage order.
    fn style_terms(&self, id: ItemId) -> Vec<String>;

    /// Replaces the item's style terms and returns the affected term ids.
    /// An empty slice removes all terms.
    fn set_style_terms(&mut self, id: ItemId, slugs: &[String]) -> Vec<TermId>;

    /// Post meta as `(key, values)` pairs.
    fn meta(&self, id: ItemId) -> Vec<(String, Vec<String>)>;

    /// Rendered galleries attached to the item, first one first.
    fn galleries(&self, id: ItemId) -> Vec<String>;

    /// Public link to the archive of a stored term slug, if the term exists.
    fn term_link(&self, slug: &str) -> Option<String>;
}

/// In-memory [`ContentRepository`].
///
/// ```rust
/// use poststyles::repository::{ContentItem, ContentRepository, MemoryRepository};
///
/// let mut repo = MemoryRepository::new();
/// repo.insert(ContentItem::new(1, "Hello"));
/// assert!(repo.item(1).is_some());
/// assert!(repo.item(2).is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryRepository {
    items: HashMap<ItemId, ContentItem>,
    #[serde(default)]
    terms: HashMap<ItemId, Vec<String>>,
    #[serde(default)]
    meta: HashMap<ItemId, IndexMap<String, Vec<String>>>,
    #[serde(default)]
    galleries: HashMap<ItemId, Vec<String>>,
    #[serde(default)]
    term_ids: IndexMap<String, TermId>,
    #[serde(default = "default_base_url")]
    base_url: String,
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            ..Self::default()
        }
    }

    /// Sets the site URL used to build term links.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Inserts or replaces an item.
    pub fn insert(&mut self, item: ContentItem) {
        self.items.insert(item.id, item);
    }

    /// Appends a meta value under `key`.
    pub fn add_meta(&mut self, id: ItemId, key: impl Into<String>, value: impl Into<String>) {
        self.meta
            .entry(id)
            .or_default()
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Attaches a rendered gallery.
    pub fn add_gallery(&mut self, id: ItemId, html: impl Into<String>) {
        self.galleries.entry(id).or_default().push(html.into());
    }

    fn term_id(&mut self, slug: &str) -> TermId {
        let next = self.term_ids.len() as TermId + 1;
        *self.term_ids.entry(slug.to_string()).or_insert(next)
    }
}

impl ContentRepository for MemoryRepository {
    fn item(&self, id: ItemId) -> Option<ContentItem> {
        self.items.get(&id).cloned()
    }

    fn style_terms(&self, id: ItemId) -> Vec<String> {
        self.terms.get(&id).cloned().unwrap_or_default()
    }

    fn set_style_terms(&mut self, id: ItemId, slugs: &[String]) -> Vec<TermId> {
        let ids = slugs.iter().map(|slug| self.term_id(slug)).collect();
        if slugs.is_empty() {
            self.terms.remove(&id);
        } else {
            self.terms.insert(id, slugs.to_vec());
        }
        ids
    }

    fn meta(&self, id: ItemId) -> Vec<(String, Vec<String>)> {
        self.meta
            .get(&id)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }

    fn galleries(&self, id: ItemId) -> Vec<String> {
        self.galleries.get(&id).cloned().unwrap_or_default()
    }

    fn term_link(&self, slug: &str) -> Option<String> {
        self.term_ids
            .contains_key(slug)
            .then(|| format!("{}/?post_style={slug}", self.base_url))
    }
}
