//! Chat transcript dialects.
//!
//! A dialect is a pair of patterns:
//!
//! - the **newline** pattern recognizes the start of a speaker turn. With one
//!   capture group, group 1 is the author. With two, group 1 is the time and
//!   group 2 the author.
//! - the **delimiter** pattern decides whether the line after a blank line
//!   still belongs to the transcript.
//!
//! Later registrations take priority over earlier ones.

use regex::Regex;

use crate::error::{PostStylesError, Result};

/// `Author: message`
pub const IM_NEWLINE: &str = r"^([^:]+):";
/// `[10:02] Author: message`
pub const SKYPE_NEWLINE: &str = r"\[(.+?)\]\s([^:]+):";
pub const COLON_DELIMITER: &str = r"[:]";

/// One named dialect.
#[derive(Debug, Clone)]
pub struct ChatParserEntry {
    name: String,
    newline: Regex,
    delimiter: Regex,
}

impl ChatParserEntry {
    /// Compiles a dialect from pattern strings.
    pub fn new(name: impl Into<String>, newline: &str, delimiter: &str) -> Result<Self> {
        let name = name.into();
        let newline =
            Regex::new(newline).map_err(|e| PostStylesError::invalid_pattern(name.clone(), e))?;
        let delimiter =
            Regex::new(delimiter).map_err(|e| PostStylesError::invalid_pattern(name.clone(), e))?;
        Ok(Self {
            name,
            newline,
            delimiter,
        })
    }

    /// Builds a dialect from already compiled patterns.
    pub fn from_regex(name: impl Into<String>, newline: Regex, delimiter: Regex) -> Self {
        Self {
            name: name.into(),
            newline,
            delimiter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn newline(&self) -> &Regex {
        &self.newline
    }

    pub fn delimiter(&self) -> &Regex {
        &self.delimiter
    }
}

/// Ordered set of dialects, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct ChatDialects {
    entries: Vec<ChatParserEntry>,
}

impl ChatDialects {
    /// Creates an empty set. Nothing will parse as chat.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set with the built-in "IM" and "Skype" dialects.
    pub fn with_builtins() -> Self {
        let mut dialects = Self::new();
        for (name, newline) in [("IM", IM_NEWLINE), ("Skype", SKYPE_NEWLINE)] {
            let entry = ChatParserEntry::new(name, newline, COLON_DELIMITER)
                .expect("built-in chat patterns compile");
            dialects.register_entry(entry);
        }
        dialects
    }

    /// Compiles and registers a dialect in front of the existing ones.
    pub fn register(&mut self, name: &str, newline: &str, delimiter: &str) -> Result<()> {
        let entry = ChatParserEntry::new(name, newline, delimiter)?;
        self.register_entry(entry);
        Ok(())
    }

    /// Registers a dialect in front of the existing ones. A dialect with the
    /// same name is replaced.
    pub fn register_entry(&mut self, entry: ChatParserEntry) {
        tracing::trace!(name = entry.name(), "registering chat dialect");
        self.entries.retain(|e| e.name != entry.name);
        self.entries.insert(0, entry);
    }

    /// Returns the first dialect whose newline pattern matches anywhere in `text`.
    pub fn select(&self, text: &str) -> Option<&ChatParserEntry> {
        self.entries.iter().find(|e| e.newline.is_match(text))
    }

    pub fn get(&self, name: &str) -> Option<&ChatParserEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Dialect names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(ChatParserEntry::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatParserEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
