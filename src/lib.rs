//! # poststyles
//!
//! Post style formatting for blog-like content: tag a post with a style such
//! as "quote", "chat" or "video", and listing pages show only the fragment of
//! its body that style calls for.
//!
//! ## Overview
//!
//! - **Style registry**: built-in styles and their labels, extensible through
//!   a label hook
//! - **Style assignment**: read and write a post's style through a
//!   [`ContentRepository`](repository::ContentRepository)
//! - **Content extractors**: one per style (first blockquote, first list,
//!   first media directive, ...)
//! - **Chat parser**: turns `Author: message` transcripts into stanzas and
//!   renders them as a definition list
//! - **Formatting dispatcher**: ties the above together behind a setting and
//!   the current view
//!
//! ## Quick Start
//!
//! ```rust
//! use poststyles::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let styles = PostStyles::builder()
//!         .config(PostStylesConfig::new().with_formatting_enabled(true))
//!         .build();
//!
//!     let body = "Scott: Hey, let's chat!\nHelen: No.";
//!     let mut repo = MemoryRepository::new();
//!     repo.insert(ContentItem::new(7, body));
//!     styles.set_style(&mut repo, 7, "chat")?;
//!
//!     let html = styles.format_content(&repo, body, 7, &RenderContext::listing());
//!     assert!(html.contains(r#"<cite class="fn">Helen</cite>"#));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`formatter`]: [`PostStyles`] and [`PostStylesBuilder`]
//! - [`registry`]: [`StyleRegistry`](registry::StyleRegistry)
//! - [`assignment`]: [`StyleAssignment`](assignment::StyleAssignment)
//! - [`extract`]: per-style extractors and the dispatch table
//! - [`chat`]: [`parse_chat`](chat::parse_chat), [`render_chat`](chat::render_chat),
//!   [`ChatDialects`](chat::ChatDialects)
//! - [`repository`]: [`ContentRepository`](repository::ContentRepository),
//!   [`MemoryRepository`](repository::MemoryRepository)
//! - [`render`]: [`Renderer`](render::Renderer) for media directives
//! - [`hooks`]: label, formatting and content filters
//! - [`config`]: [`PostStylesConfig`](config::PostStylesConfig),
//!   [`RenderContext`](config::RenderContext)
//! - [`html`], [`shortcode`]: markup helpers
//! - [`cli`]: CLI types (feature `cli`)
//! - [`error`]: [`PostStylesError`], [`Result`]
//! - [`prelude`]: Convenient re-exports

pub mod assignment;
pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatter;
pub mod hooks;
pub mod html;
pub mod registry;
pub mod render;
pub mod repository;
pub mod shortcode;
pub mod style;

// Re-export the main types at the crate root for convenience
pub use error::{PostStylesError, Result};
pub use formatter::{PostStyles, PostStylesBuilder};
pub use style::StyleKey;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use poststyles::prelude::*;
/// ```
pub mod prelude {
    // Context
    pub use crate::{PostStyles, PostStylesBuilder, StyleKey};

    // Error types
    pub use crate::error::{PostStylesError, Result};

    // Configuration
    pub use crate::config::{PostStylesConfig, RenderContext};

    // Storage and rendering collaborators
    pub use crate::render::{BasicRenderer, MediaKind, Renderer};
    pub use crate::repository::{ContentItem, ContentRepository, ItemId, MemoryRepository, TermId};

    // Chat
    pub use crate::chat::{ChatDialects, ChatLine, ChatTranscript, parse_chat, render_chat};

    // Registry and assignment
    pub use crate::assignment::{StyleAssignment, StyleChoices};
    pub use crate::registry::StyleRegistry;
}
