//! Shortcode directives embedded in post bodies.
//!
//! A shortcode is `[name attr="value" …]`, optionally closed by
//! `[/name]` with enclosed content. `[[name]]` is an escaped literal and
//! never matches.
//!
//! ```rust
//! use poststyles::shortcode::find_shortcode;
//!
//! let body = r#"Intro [audio src="song.mp3" loop] outro"#;
//! let sc = find_shortcode(body, "audio").unwrap();
//! assert_eq!(sc.attrs.get("src"), Some("song.mp3"));
//! assert_eq!(sc.attrs.positional(), ["loop"]);
//! ```

use std::ops::Range;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

static OPEN_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();

fn open_tag_regex() -> &'static Regex {
    OPEN_TAG_REGEX.get_or_init(|| {
        Regex::new(r"\[(\[?)([\w-]+)((?:\s[^\]]*?)?)(/?)\](\]?)")
            .expect("Failed to compile shortcode regex")
    })
}

fn attr_regex() -> &'static Regex {
    ATTR_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?x)
            ([\w-]+)\s*=\s*"([^"]*)"(?:\s|$)
            | ([\w-]+)\s*=\s*'([^']*)'(?:\s|$)
            | ([\w-]+)\s*=\s*([^\s'"]+)(?:\s|$)
            | "([^"]*)"(?:\s|$)
            | '([^']*)'(?:\s|$)
            | (\S+)(?:\s|$)
            "#,
        )
        .expect("Failed to compile shortcode attribute regex")
    })
}

/// Parsed shortcode attributes: named pairs plus bare positional values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShortcodeAttrs {
    named: IndexMap<String, String>,
    positional: Vec<String>,
}

impl ShortcodeAttrs {
    /// Parses an attribute string such as `src="a.mp3" loop autoplay=1`.
    ///
    /// Names are lowercased. Values keep their original text.
    pub fn parse(text: &str) -> Self {
        let text = text.replace(['\u{a0}', '\u{200b}'], " ");
        let mut attrs = Self::default();

        for caps in attr_regex().captures_iter(&text) {
            let pair = [(1, 2), (3, 4), (5, 6)]
                .into_iter()
                .find_map(|(k, v)| Some((caps.get(k)?, caps.get(v)?)));

            if let Some((name, value)) = pair {
                attrs
                    .named
                    .insert(name.as_str().to_lowercase(), value.as_str().to_string());
            } else if let Some(bare) = caps.get(7).or_else(|| caps.get(8)).or_else(|| caps.get(9))
            {
                attrs.positional.push(bare.as_str().to_string());
            }
        }
        attrs
    }

    /// Named attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Named attributes in source order.
    pub fn named(&self) -> &IndexMap<String, String> {
        &self.named
    }

    /// Bare values without a name.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}

/// One shortcode occurrence in a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcode {
    pub tag: String,
    pub attrs: ShortcodeAttrs,
    /// Enclosed content for `[tag]…[/tag]` forms.
    pub content: Option<String>,
    /// Byte range of the whole occurrence, closing tag included.
    pub range: Range<usize>,
}

/// Returns every shortcode in `text`, in order. Escaped `[[tag]]` forms are
/// skipped.
pub fn find_all(text: &str) -> Vec<Shortcode> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = open_tag_regex().captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        let escaped = !caps[1].is_empty() && !caps[5].is_empty();
        if escaped {
            pos = whole.end();
            continue;
        }

        let open_start = whole.start() + caps[1].len();
        let open_end = whole.end() - caps[5].len();
        let tag = caps[2].to_string();
        let self_closing = !caps[4].is_empty();

        let mut end = open_end;
        let mut content = None;
        if !self_closing {
            let closing = format!("[/{tag}]");
            if let Some(offset) = text[open_end..].find(&closing) {
                content = Some(text[open_end..open_end + offset].to_string());
                end = open_end + offset + closing.len();
            }
        }

        found.push(Shortcode {
            attrs: ShortcodeAttrs::parse(&caps[3]),
            tag,
            content,
            range: open_start..end,
        });
        pos = end.max(open_start + 1);
    }
    found
}

/// Returns the first shortcode named `tag`.
pub fn find_shortcode(text: &str, tag: &str) -> Option<Shortcode> {
    find_all(text).into_iter().find(|sc| sc.tag == tag)
}
