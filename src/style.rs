//! The style identifier attached to a post.
//!
//! [`StyleKey`] names one of the built-in post styles or an extension key
//! registered by a label hook. It parses from and displays as its slug.
//!
//! ```rust
//! use poststyles::StyleKey;
//!
//! let key: StyleKey = "link-list".parse().unwrap();
//! assert_eq!(key, StyleKey::LinkList);
//! assert_eq!(key.to_string(), "link-list");
//!
//! let custom: StyleKey = "status".parse().unwrap();
//! assert_eq!(custom, StyleKey::Custom("status".into()));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix the storage layer adds to every style term slug.
pub const TERM_PREFIX: &str = "post-style-";

/// A post style identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StyleKey {
    /// No special formatting
    #[default]
    Standard,
    Aside,
    Image,
    Video,
    Audio,
    Playlist,
    Quote,
    Link,
    /// A post whose body is mostly a bulleted or numbered list
    LinkList,
    Gallery,
    Embed,
    NoPhoto,
    Chat,
    /// An extension key registered through the label hook
    Custom(String),
}

impl StyleKey {
    /// Returns the slug for this key.
    pub fn as_str(&self) -> &str {
        match self {
            StyleKey::Standard => "standard",
            StyleKey::Aside => "aside",
            StyleKey::Image => "image",
            StyleKey::Video => "video",
            StyleKey::Audio => "audio",
            StyleKey::Playlist => "playlist",
            StyleKey::Quote => "quote",
            StyleKey::Link => "link",
            StyleKey::LinkList => "link-list",
            StyleKey::Gallery => "gallery",
            StyleKey::Embed => "embed",
            StyleKey::NoPhoto => "no-photo",
            StyleKey::Chat => "chat",
            StyleKey::Custom(slug) => slug,
        }
    }

    /// Maps a slug to its key; anything unrecognized becomes [`StyleKey::Custom`].
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "standard" => StyleKey::Standard,
            "aside" => StyleKey::Aside,
            "image" => StyleKey::Image,
            "video" => StyleKey::Video,
            "audio" => StyleKey::Audio,
            "playlist" => StyleKey::Playlist,
            "quote" => StyleKey::Quote,
            "link" => StyleKey::Link,
            "link-list" => StyleKey::LinkList,
            "gallery" => StyleKey::Gallery,
            "embed" => StyleKey::Embed,
            "no-photo" => StyleKey::NoPhoto,
            "chat" => StyleKey::Chat,
            other => StyleKey::Custom(other.to_string()),
        }
    }

    /// Returns the built-in keys in registry order ("standard" first).
    pub fn builtin() -> &'static [StyleKey] {
        &[
            StyleKey::Standard,
            StyleKey::Aside,
            StyleKey::Image,
            StyleKey::Video,
            StyleKey::Audio,
            StyleKey::Playlist,
            StyleKey::Quote,
            StyleKey::Link,
            StyleKey::LinkList,
            StyleKey::Gallery,
            StyleKey::Embed,
            StyleKey::NoPhoto,
            StyleKey::Chat,
        ]
    }

    /// Returns `true` for the "standard" key.
    pub fn is_standard(&self) -> bool {
        matches!(self, StyleKey::Standard)
    }

    /// Returns the slug as stored by the taxonomy (`post-style-quote`).
    pub fn term_slug(&self) -> String {
        format!("{TERM_PREFIX}{}", self.as_str())
    }
}

/// Removes the storage prefix from a term slug, if present.
pub fn strip_term_prefix(slug: &str) -> &str {
    slug.strip_prefix(TERM_PREFIX).unwrap_or(slug)
}

/// Normalizes user input into a key slug: lowercase, `[a-z0-9_-]` only.
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| {
            let c = c.to_ascii_lowercase();
            (c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-').then_some(c)
        })
        .collect()
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StyleKey::from_slug(&sanitize_key(s)))
    }
}

impl From<&str> for StyleKey {
    fn from(slug: &str) -> Self {
        StyleKey::from_slug(slug)
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Ok(StyleKey::from_slug(&slug))
    }
}
