//! Media rendering collaborator.
//!
//! Audio, video and playlist players are produced by the host platform. The
//! extractors hand it the parsed directive attributes through [`Renderer`].
//! [`BasicRenderer`] emits plain HTML5 elements and is what the CLI uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::html::esc_attr;
use crate::shortcode::{self, ShortcodeAttrs};

/// Media directives the extractors know how to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    Playlist,
}

impl MediaKind {
    /// The shortcode tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Playlist => "playlist",
        }
    }

    pub fn all() -> &'static [MediaKind] {
        &[MediaKind::Audio, MediaKind::Video, MediaKind::Playlist]
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Renders media directives into HTML.
pub trait Renderer: Send + Sync {
    /// Renders one directive. An empty string means "nothing to show".
    fn render_media(&self, kind: MediaKind, attrs: &ShortcodeAttrs) -> String;

    /// Replaces every media shortcode in `content` with its rendering.
    /// Other shortcodes are left untouched.
    fn expand_shortcodes(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        for sc in shortcode::find_all(content) {
            let Some(kind) = MediaKind::from_tag(&sc.tag) else {
                continue;
            };
            out.push_str(&content[last..sc.range.start]);
            out.push_str(&self.render_media(kind, &sc.attrs));
            last = sc.range.end;
        }
        out.push_str(&content[last..]);
        out
    }
}

/// Plain HTML5 renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRenderer;

impl BasicRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for BasicRenderer {
    fn render_media(&self, kind: MediaKind, attrs: &ShortcodeAttrs) -> String {
        match kind {
            MediaKind::Audio | MediaKind::Video => {
                let Some(src) = media_source(kind, attrs) else {
                    return String::new();
                };
                let flags: String = ["loop", "autoplay", "muted"]
                    .into_iter()
                    .filter(|flag| is_truthy(attrs.get(flag)))
                    .map(|flag| format!(" {flag}"))
                    .collect();
                format!(
                    r#"<{tag} class="wp-{tag}-shortcode" controls{flags} src="{src}"></{tag}>"#,
                    tag = kind.tag(),
                    src = esc_attr(src),
                )
            }
            MediaKind::Playlist => {
                let Some(ids) = attrs.get("ids").filter(|ids| !ids.is_empty()) else {
                    return String::new();
                };
                let kind = attrs.get("type").unwrap_or("audio");
                let items: String = ids
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| format!(r#"<li class="wp-playlist-item" data-id="{}"></li>"#, esc_attr(id)))
                    .collect();
                format!(
                    r#"<ol class="wp-playlist wp-{}-playlist">{items}</ol>"#,
                    esc_attr(kind)
                )
            }
        }
    }
}

fn media_source(kind: MediaKind, attrs: &ShortcodeAttrs) -> Option<&str> {
    let extensions: &[&str] = match kind {
        MediaKind::Audio => &["mp3", "ogg", "m4a", "wav"],
        MediaKind::Video => &["mp4", "webm", "ogv", "m4v"],
        MediaKind::Playlist => &[],
    };
    attrs
        .get("src")
        .or_else(|| extensions.iter().find_map(|ext| attrs.get(ext)))
        .or_else(|| attrs.positional().first().map(String::as_str))
        .filter(|src| !src.is_empty())
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true" | "on" | "yes"))
}
