//! Edge case tests for poststyles
//!
//! These tests cover boundary conditions of the extractors, the chat parser
//! and assignment that the unit tests don't reach through the public API.

use poststyles::chat::{ChatDialects, parse_chat, render_chat};
use poststyles::extract::{anchor, iframe, link_list, quote};
use poststyles::prelude::*;
use poststyles::shortcode::{ShortcodeAttrs, find_all};

fn enabled() -> PostStyles {
    PostStyles::builder()
        .config(PostStylesConfig::new().with_formatting_enabled(true))
        .build()
}

// =========================================================================
// Empty and whitespace input
// =========================================================================

#[test]
fn test_empty_content_every_style() {
    let styles = enabled();
    for key in styles.registry().list_style_keys() {
        let mut repo = MemoryRepository::new();
        repo.insert(ContentItem::new(1, ""));
        styles.set_style(&mut repo, 1, key).unwrap();
        let html = styles.format_content(&repo, "", 1, &RenderContext::listing());
        assert_eq!(html, "", "style {key}");
    }
}

#[test]
fn test_chat_whitespace_and_markup_only() {
    let dialects = ChatDialects::with_builtins();
    assert!(parse_chat("   \n\t ", &dialects).is_empty());
    assert!(parse_chat("<p></p><br />", &dialects).is_empty());
    assert_eq!(render_chat(&parse_chat("", &dialects)), "");
}

// =========================================================================
// Unicode
// =========================================================================

#[test]
fn test_unicode_authors_and_messages() {
    let dialects = ChatDialects::with_builtins();
    let transcript = parse_chat("Иван: Привет мир!\n田中: こんにちは", &dialects);
    let lines: Vec<_> = transcript.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].author, "Иван");
    assert_eq!(lines[1].message, "こんにちは");

    let html = render_chat(&transcript);
    assert!(html.contains("chat-author-иван"));
}

#[test]
fn test_unicode_quote() {
    let body = "Вступление <blockquote>Цитата 🎉</blockquote>";
    assert_eq!(quote(body), "<blockquote>Цитата 🎉</blockquote>");
}

// =========================================================================
// Line endings
// =========================================================================

#[test]
fn test_crlf_transcript() {
    let dialects = ChatDialects::with_builtins();
    let transcript = parse_chat("Scott: one\r\nHelen: two\r\n\r\nScott: three", &dialects);
    assert_eq!(transcript.stanzas.len(), 2);
    assert_eq!(transcript.stanzas[0][1].message, "two");
}

// =========================================================================
// Malformed markup
// =========================================================================

#[test]
fn test_unclosed_blockquote_returns_whole_content() {
    let body = "<blockquote>never closed";
    assert_eq!(quote(body), body);
}

#[test]
fn test_unclosed_list_is_empty() {
    assert_eq!(link_list("<ul><li>never closed"), "");
}

#[test]
fn test_anchor_with_nested_markup_is_skipped() {
    let body = "<a href=\"x\"><img src=\"y\"></a> and <a href=\"z\">text</a>";
    assert_eq!(anchor(body), Some("<a href=\"z\">text</a>"));
}

#[test]
fn test_iframe_spanning_lines() {
    let body = "<IFRAME\n src=\"a\">\n</IFRAME>";
    assert_eq!(iframe(body), Some(body));
}

// =========================================================================
// Shortcodes
// =========================================================================

#[test]
fn test_escaped_shortcode_is_not_rendered() {
    let styles = enabled();
    let body = "Write [[audio src=\"a.mp3\"]] to embed audio.";
    let mut repo = MemoryRepository::new();
    repo.insert(ContentItem::new(1, body));
    styles.set_style(&mut repo, 1, "playlist").unwrap();

    assert!(find_all(body).is_empty());
    assert_eq!(
        styles.format_content(&repo, body, 1, &RenderContext::listing()),
        body
    );
}

#[test]
fn test_shortcode_attribute_forms() {
    let attrs = ShortcodeAttrs::parse(r#"src="a b.mp3" title='Hi there' width=640 loop "bare""#);
    assert_eq!(attrs.get("src"), Some("a b.mp3"));
    assert_eq!(attrs.get("title"), Some("Hi there"));
    assert_eq!(attrs.get("width"), Some("640"));
    assert!(attrs.positional().contains(&"loop".to_string()));
    assert!(attrs.positional().contains(&"bare".to_string()));
}

#[test]
fn test_enclosing_shortcode_content() {
    let found = find_all("[video src=\"v.mp4\"]caption[/video] tail");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].content.as_deref(), Some("caption"));
}

// =========================================================================
// Assignment inputs
// =========================================================================

#[test]
fn test_style_key_is_sanitized_on_set() {
    let styles = PostStyles::new();
    let mut repo = MemoryRepository::new();
    repo.insert(ContentItem::new(1, "x"));

    styles.set_style(&mut repo, 1, " Link-List! ").unwrap();
    assert_eq!(styles.get_style(&repo, 1).as_deref(), Some("link-list"));
}

#[test]
fn test_get_style_missing_item() {
    let styles = PostStyles::new();
    let repo = MemoryRepository::new();
    assert_eq!(styles.get_style(&repo, 404), None);
    assert!(!styles.has_style(&repo, 404, &[]));
    assert!(styles.assignment().post_classes(&repo, 404, &RenderContext::listing()).is_empty());
}

#[test]
fn test_style_choices_ignores_unregistered_term() {
    let styles = PostStyles::new();
    let mut repo = MemoryRepository::new();
    repo.insert(ContentItem::new(1, "x"));
    repo.set_style_terms(1, &["post-style-retired".to_string()]);

    assert_eq!(styles.get_style(&repo, 1).as_deref(), Some("retired"));
    assert_eq!(styles.assignment().style_choices(&repo, 1).selected, "0");
}
