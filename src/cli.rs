//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`FormatReport`] - The document written in JSON mode
//!
//! ```rust
//! use poststyles::cli::OutputFormat;
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format.extension(), "json");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::chat::ChatTranscript;

/// Format a post body the way a listing page shows it for a given style.
#[derive(Parser, Debug, Clone)]
#[command(name = "poststyles")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    poststyles chat transcript.txt
    poststyles quote post.html -o quote.html
    poststyles chat transcript.txt --format json
    poststyles video post.html --config site.json
    cat post.html | poststyles link -")]
pub struct Args {
    /// Style to assign (e.g. chat, quote, link-list)
    pub style: String,

    /// Path to the post body, or "-" for stdin
    pub input: String,

    /// Path to output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Render as a single-post view (formatting never applies)
    #[arg(long)]
    pub single: bool,

    /// Turn formatting off
    #[arg(long)]
    pub disabled: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The formatted HTML fragment (default)
    #[default]
    Html,

    /// A JSON report with style, label and content
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["html", "json"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "HTML"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// What `--format json` writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    /// The style the post ended up with
    pub style: String,

    /// Its display label (empty for unregistered styles)
    pub label: String,

    /// Formatted content
    pub content: String,

    /// Parsed transcript, for chat posts that contain one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<ChatTranscript>,
}
