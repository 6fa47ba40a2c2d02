//! Chat transcript parsing and rendering.
//!
//! Turns freeform `Author: message` text into structured stanzas and renders
//! them as a definition list.
//!
//! ```rust
//! use poststyles::chat::{ChatDialects, parse_chat};
//!
//! let dialects = ChatDialects::with_builtins();
//! let transcript = parse_chat("Scott: Hey, let's chat!\nHelen: No.", &dialects);
//!
//! assert_eq!(transcript.stanzas.len(), 1);
//! assert_eq!(transcript.stanzas[0][1].author, "Helen");
//! assert_eq!(transcript.stanzas[0][1].message, "No.");
//! ```

mod dialect;
mod parser;
mod render;

pub use dialect::{COLON_DELIMITER, ChatDialects, ChatParserEntry, IM_NEWLINE, SKYPE_NEWLINE};
pub use parser::parse_chat;
pub use render::render_chat;

use serde::{Deserialize, Serialize};

/// One speaker turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    /// Timestamp text as written in the transcript; empty when absent.
    #[serde(default)]
    pub time: String,

    pub author: String,

    /// Message text, already auto-linked.
    pub message: String,
}

impl ChatLine {
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time: String::new(),
            author: author.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn has_time(&self) -> bool {
        !self.time.is_empty()
    }
}

/// A contiguous block of speaker turns, separated from the next by a blank line.
pub type Stanza = Vec<ChatLine>;

/// A parsed transcript. Empty means the content is not chat-shaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatTranscript {
    pub stanzas: Vec<Stanza>,
}

impl ChatTranscript {
    pub fn new(stanzas: Vec<Stanza>) -> Self {
        Self { stanzas }
    }

    pub fn is_empty(&self) -> bool {
        self.stanzas.is_empty()
    }

    /// All lines across stanzas, in order.
    pub fn lines(&self) -> impl Iterator<Item = &ChatLine> {
        self.stanzas.iter().flatten()
    }

    /// Total number of lines across stanzas.
    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(Vec::len).sum()
    }
}
