//! Named extension points.
//!
//! | Hook | Signature | Runs |
//! |------|-----------|------|
//! | label filter | `FnMut(&mut IndexMap<String, String>)` | once, when the registry is built |
//! | formatting filter | `Fn(bool) -> bool` | per format call, on the "enabled" setting |
//! | content filter | `Fn(String, &StyleKey) -> String` | per format call, on the extracted fragment |
//!
//! Filters run in registration order; each receives the previous output.

use std::fmt;

use indexmap::IndexMap;

use crate::style::StyleKey;

pub type LabelFilter = Box<dyn Fn(&mut IndexMap<String, String>) + Send + Sync>;
pub type FormattingFilter = Box<dyn Fn(bool) -> bool + Send + Sync>;
pub type ContentFilter = Box<dyn Fn(String, &StyleKey) -> String + Send + Sync>;

/// Registered hook callbacks.
#[derive(Default)]
pub struct Hooks {
    label_filters: Vec<LabelFilter>,
    formatting_filters: Vec<FormattingFilter>,
    content_filters: Vec<ContentFilter>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter over the style label table (everything except "standard").
    pub fn add_label_filter<F>(&mut self, filter: F)
    where
        F: Fn(&mut IndexMap<String, String>) + Send + Sync + 'static,
    {
        self.label_filters.push(Box::new(filter));
    }

    /// Adds a filter deciding whether formatting is enabled.
    pub fn add_formatting_filter<F>(&mut self, filter: F)
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        self.formatting_filters.push(Box::new(filter));
    }

    /// Adds a post-processing filter over formatted content.
    pub fn add_content_filter<F>(&mut self, filter: F)
    where
        F: Fn(String, &StyleKey) -> String + Send + Sync + 'static,
    {
        self.content_filters.push(Box::new(filter));
    }

    pub(crate) fn apply_labels(&self, labels: &mut IndexMap<String, String>) {
        for filter in &self.label_filters {
            filter(labels);
        }
    }

    pub(crate) fn apply_formatting(&self, enabled: bool) -> bool {
        self.formatting_filters
            .iter()
            .fold(enabled, |acc, filter| filter(acc))
    }

    pub(crate) fn apply_content(&self, content: String, style: &StyleKey) -> String {
        self.content_filters
            .iter()
            .fold(content, |acc, filter| filter(acc, style))
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("label_filters", &self.label_filters.len())
            .field("formatting_filters", &self.formatting_filters.len())
            .field("content_filters", &self.content_filters.len())
            .finish()
    }
}
