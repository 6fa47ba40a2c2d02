//! Region extractors over HTML markup.
//!
//! Each pattern is case-insensitive with `.` matching newlines, and only the
//! leftmost match is used. Nested or malformed markup can cut a region short;
//! these are not HTML parsers.

use std::sync::OnceLock;

use regex::Regex;

use crate::html::autop;

static BLOCKQUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
static IFRAME_REGEX: OnceLock<Regex> = OnceLock::new();
static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn blockquote_regex() -> &'static Regex {
    BLOCKQUOTE_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<blockquote[^>]*>.+?</blockquote>")
            .expect("Failed to compile blockquote regex")
    })
}

fn list_regex() -> &'static Regex {
    LIST_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<(?:ul|ol)\b.*?</(?:ul|ol)>").expect("Failed to compile list regex")
    })
}

fn iframe_regex() -> &'static Regex {
    IFRAME_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<iframe.*?</iframe>").expect("Failed to compile iframe regex")
    })
}

fn anchor_regex() -> &'static Regex {
    ANCHOR_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<a[^>]*>[^<]*</a>").expect("Failed to compile anchor regex")
    })
}

/// First `<blockquote>` region. Content without one is treated as the quote
/// itself; empty content gives an empty quote.
///
/// ```rust
/// use poststyles::extract::quote;
///
/// assert_eq!(quote("Intro <blockquote>Hi</blockquote> outro"), "<blockquote>Hi</blockquote>");
/// assert_eq!(quote("Just words"), "Just words");
/// ```
pub fn quote(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    blockquote_regex()
        .find(content)
        .map_or(content, |m| m.as_str())
        .to_string()
}

/// The quote wrapped in a `<figure class="quote">` with paragraph markup.
pub fn quote_figure(content: &str) -> String {
    let quote = quote(content);
    if quote.is_empty() {
        return quote;
    }
    format!(r#"<figure class="quote">{}</figure>"#, autop(&quote))
}

/// First `<ul>` or `<ol>` region, or an empty string.
pub fn link_list(content: &str) -> String {
    list_regex()
        .find(content)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First `<iframe>` element.
pub fn iframe(content: &str) -> Option<&str> {
    iframe_regex().find(content).map(|m| m.as_str())
}

/// First `<a>` element with plain-text content.
pub fn anchor(content: &str) -> Option<&str> {
    anchor_regex().find(content).map(|m| m.as_str())
}
