//! Unified error types for poststyles.
//!
//! Most operations in this crate cannot fail: unknown styles are normalized,
//! unresolvable items read as "no style" and non-chat content parses to an
//! empty transcript. [`PostStylesError`] covers the few cases that must be
//! reported to the caller.

use std::io;

use thiserror::Error;

use crate::repository::ItemId;

/// A specialized [`Result`] type for poststyles operations.
///
/// # Example
///
/// ```rust
/// use poststyles::error::Result;
///
/// fn assign() -> Result<Vec<u64>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PostStylesError>;

/// The error type for all poststyles operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PostStylesError {
    /// The content item could not be resolved by the repository.
    ///
    /// Returned by style assignment; no mutation happens in that case.
    #[error("Invalid post: no content item with id {id}")]
    InvalidPost {
        /// The id that failed to resolve
        id: ItemId,
    },

    /// A chat dialect pattern failed to compile.
    #[error("Invalid pattern for chat style '{name}': {source}")]
    InvalidPattern {
        /// Name of the dialect being registered (e.g. "IRC")
        name: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The configuration is structurally valid but semantically wrong.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PostStylesError {
    /// Creates an invalid post error.
    pub fn invalid_post(id: ItemId) -> Self {
        PostStylesError::InvalidPost { id }
    }

    /// Creates an invalid pattern error for the named chat style.
    pub fn invalid_pattern(name: impl Into<String>, source: regex::Error) -> Self {
        PostStylesError::InvalidPattern {
            name: name.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        PostStylesError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Machine-readable error code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            PostStylesError::InvalidPost { .. } => "invalid_post",
            PostStylesError::InvalidPattern { .. } => "invalid_pattern",
            PostStylesError::InvalidConfig { .. } => "invalid_config",
            PostStylesError::Io(_) => "io",
            #[cfg(feature = "json-output")]
            PostStylesError::Json(_) => "json",
        }
    }

    /// Returns `true` if this is an invalid post error.
    pub fn is_invalid_post(&self) -> bool {
        matches!(self, PostStylesError::InvalidPost { .. })
    }

    /// Returns `true` if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, PostStylesError::InvalidPattern { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PostStylesError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex_error() -> regex::Error {
        regex::Regex::new("(unclosed").unwrap_err()
    }

    #[test]
    fn test_invalid_post_display_and_code() {
        let err = PostStylesError::invalid_post(42);
        assert!(err.to_string().contains("42"));
        assert_eq!(err.code(), "invalid_post");
        assert!(err.is_invalid_post());
        assert!(!err.is_io());
    }

    #[test]
    fn test_invalid_pattern_names_dialect() {
        let err = PostStylesError::invalid_pattern("IRC", regex_error());
        let display = err.to_string();
        assert!(display.contains("IRC"));
        assert!(err.is_invalid_pattern());
        assert_eq!(err.code(), "invalid_pattern");
    }

    #[test]
    fn test_invalid_pattern_source_chain() {
        use std::error::Error;
        let err = PostStylesError::invalid_pattern("IRC", regex_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = PostStylesError::invalid_config("no supported post types");
        assert!(err.to_string().contains("no supported post types"));
        assert_eq!(err.code(), "invalid_config");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: PostStylesError = io_err.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("file not found"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: PostStylesError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
        assert_eq!(err.code(), "json");
    }

    #[test]
    fn test_error_debug() {
        let err = PostStylesError::invalid_post(7);
        assert!(format!("{:?}", err).contains("InvalidPost"));
    }
}
