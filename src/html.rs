//! Small HTML text utilities shared by the extractors and the chat renderer.
//!
//! They operate on HTML fragments, not documents. Escaping and entity
//! decoding go through `html_escape`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
static LINKABLE_REGEX: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("Failed to compile tag regex")
    })
}

fn entity_regex() -> &'static Regex {
    ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")
            .expect("Failed to compile entity regex")
    })
}

fn linkable_regex() -> &'static Regex {
    LINKABLE_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?xi)
            (?P<url>\b(?:https?|ftps?)://[^\s<>"']+)
            |
            (?P<www>\bwww\.[^\s<>"']+)
            |
            (?P<email>\b[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,})
            "#,
        )
        .expect("Failed to compile linkable regex")
    })
}

fn paragraph_break_regex() -> &'static Regex {
    PARAGRAPH_BREAK_REGEX.get_or_init(|| {
        Regex::new(r"\n[ \t]*\n").expect("Failed to compile paragraph break regex")
    })
}

/// Removes all tags and comments, leaving text content.
pub fn strip_tags(input: &str) -> String {
    tag_regex().replace_all(input, "").into_owned()
}

/// Escapes text for use inside HTML, leaving existing entities alone.
pub fn esc_html(input: &str) -> String {
    escape_around_entities(input, Escape::Text)
}

/// Escapes text for use inside a quoted attribute value, leaving existing
/// entities alone.
pub fn esc_attr(input: &str) -> String {
    escape_around_entities(input, Escape::Attribute)
}

#[derive(Clone, Copy)]
enum Escape {
    Text,
    Attribute,
}

fn escape_around_entities(input: &str, mode: Escape) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for entity in entity_regex().find_iter(input) {
        push_escaped(&mut out, &input[last..entity.start()], mode);
        out.push_str(entity.as_str());
        last = entity.end();
    }
    push_escaped(&mut out, &input[last..], mode);
    out
}

fn push_escaped(out: &mut String, segment: &str, mode: Escape) {
    match mode {
        Escape::Text => out.push_str(&html_escape::encode_text(segment)),
        Escape::Attribute => out.push_str(&html_escape::encode_quoted_attribute(segment)),
    }
}

/// Turns a title into a lowercase dash-separated slug.
///
/// Entities are decoded first, so `&amp;` counts as a plain `&` and is dropped.
///
/// ```rust
/// use poststyles::html::sanitize_title_with_dashes;
///
/// assert_eq!(sanitize_title_with_dashes("Mr. Smith"), "mr-smith");
/// assert_eq!(sanitize_title_with_dashes("<b>Helen</b>  O'Neil"), "helen-oneil");
/// ```
pub fn sanitize_title_with_dashes(title: &str) -> String {
    let stripped = strip_tags(title);
    let decoded = html_escape::decode_html_entities(&stripped);
    let mut slug = String::with_capacity(decoded.len());

    for c in decoded.chars() {
        if c.is_whitespace() || c == '.' || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_alphanumeric() || c == '_' {
            slug.extend(c.to_lowercase());
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Converts bare URLs, `www.` hosts and e-mail addresses into anchors.
///
/// Text inside existing tags and inside `<a>…</a>` is left alone.
///
/// ```rust
/// use poststyles::html::make_clickable;
///
/// assert_eq!(
///     make_clickable("see https://example.com."),
///     r#"see <a href="https://example.com" rel="nofollow">https://example.com</a>."#
/// );
/// ```
pub fn make_clickable(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut inside_anchor = false;
    let mut last = 0;

    for tag in tag_regex().find_iter(input) {
        let text = &input[last..tag.start()];
        if inside_anchor {
            out.push_str(text);
        } else {
            out.push_str(&link_text(text));
        }

        let lower = tag.as_str().to_ascii_lowercase();
        if lower.starts_with("<a ") || lower == "<a>" {
            inside_anchor = true;
        } else if lower.starts_with("</a") {
            inside_anchor = false;
        }
        out.push_str(tag.as_str());
        last = tag.end();
    }

    let tail = &input[last..];
    if inside_anchor {
        out.push_str(tail);
    } else {
        out.push_str(&link_text(tail));
    }
    out
}

fn link_text(text: &str) -> String {
    linkable_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let (target, trailing) = split_trailing_punctuation(whole);
            let href = if caps.name("email").is_some() {
                format!("mailto:{target}")
            } else if caps.name("www").is_some() {
                format!("http://{target}")
            } else {
                target.to_string()
            };
            format!(
                r#"<a href="{}" rel="nofollow">{}</a>{}"#,
                esc_attr(&href),
                target,
                trailing
            )
        })
        .into_owned()
}

fn split_trailing_punctuation(s: &str) -> (&str, &str) {
    let trimmed = s.trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
    s.split_at(trimmed.len())
}

const BLOCK_TAGS: &[&str] = &[
    "blockquote", "div", "dl", "figure", "h1", "h2", "h3", "h4", "h5", "h6", "iframe", "ol",
    "p", "pre", "table", "ul",
];

/// Wraps blank-line separated text blocks in `<p>` and turns single newlines
/// into `<br />`. Blocks that already open with a block-level tag are kept.
pub fn autop(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let mut out = String::new();

    for block in paragraph_break_regex().split(normalized.trim()) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if starts_with_block_tag(block) {
            out.push_str(block);
        } else {
            out.push_str("<p>");
            out.push_str(&block.replace('\n', "<br />\n"));
            out.push_str("</p>");
        }
        out.push('\n');
    }
    out
}

fn starts_with_block_tag(block: &str) -> bool {
    let Some(rest) = block.strip_prefix('<') else {
        return false;
    };
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCK_TAGS.contains(&name.as_str())
}
