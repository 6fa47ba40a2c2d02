//! Configuration types.
//!
//! [`PostStylesConfig`] holds the site settings the formatter reads.
//! [`RenderContext`] describes the view being rendered.
//!
//! # Example
//!
//! ```rust
//! use poststyles::config::PostStylesConfig;
//!
//! let config = PostStylesConfig::new()
//!     .with_formatting_enabled(true)
//!     .with_supported_post_type("page");
//!
//! assert!(config.supports_styles("page"));
//! ```

#[cfg(feature = "json-output")]
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(feature = "json-output")]
use crate::error::{PostStylesError, Result};

/// Site-wide post style settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostStylesConfig {
    /// "Enable post style formatting" (default: false)
    pub formatting_enabled: bool,

    /// Post types that carry a style (default: `["post"]`)
    pub supported_post_types: Vec<String>,
}

impl Default for PostStylesConfig {
    fn default() -> Self {
        Self {
            formatting_enabled: false,
            supported_post_types: vec!["post".to_string()],
        }
    }
}

impl PostStylesConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables formatting.
    #[must_use]
    pub fn with_formatting_enabled(mut self, enabled: bool) -> Self {
        self.formatting_enabled = enabled;
        self
    }

    /// Adds a post type that supports styles.
    #[must_use]
    pub fn with_supported_post_type(mut self, post_type: impl Into<String>) -> Self {
        let post_type = post_type.into();
        if !self.supported_post_types.contains(&post_type) {
            self.supported_post_types.push(post_type);
        }
        self
    }

    /// Returns `true` if items of `post_type` can carry a style.
    pub fn supports_styles(&self, post_type: &str) -> bool {
        self.supported_post_types.iter().any(|t| t == post_type)
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.supported_post_types.iter().any(String::is_empty) {
            return Err(PostStylesError::invalid_config(
                "supported_post_types contains an empty post type",
            ));
        }
        Ok(config)
    }

    /// Reads a JSON configuration file.
    #[cfg(feature = "json-output")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// The view a piece of content is being rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Rendering a single item's detail page. Formatting never applies there.
    pub single_view: bool,
}

impl RenderContext {
    /// A listing view (archive, home, feed).
    pub fn listing() -> Self {
        Self { single_view: false }
    }

    /// A single item's detail view.
    pub fn single() -> Self {
        Self { single_view: true }
    }
}
