//! # poststyles CLI
//!
//! Command-line interface for the poststyles library.

use std::fs;
use std::io::{self, Read};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use poststyles::cli::{Args, FormatReport, OutputFormat};
use poststyles::prelude::*;
use poststyles::style::sanitize_key;

/// Id of the single in-memory post the CLI formats.
const POST_ID: u64 = 1;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so formatted output on stdout stays clean.
/// Verbosity is controlled with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let mut config = match &args.config {
        Some(path) => PostStylesConfig::from_path(path)?,
        None => PostStylesConfig::default(),
    };
    config.formatting_enabled = !args.disabled;

    let verbose = args.output.is_some();
    if verbose {
        println!("📦 poststyles v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("🎨 Style:   {}", args.style);
        println!("📂 Input:   {}", args.input);
        println!("📄 Format:  {}", args.format);
        if args.single {
            println!("🔍 View:    single");
        }
        println!();
    }

    let content = read_input(&args.input)?;

    let styles = PostStyles::builder().config(config).build();
    let mut repo = MemoryRepository::new();
    repo.insert(ContentItem::new(POST_ID, content.clone()));
    styles.set_style(&mut repo, POST_ID, &args.style)?;

    let style = styles
        .get_style(&repo, POST_ID)
        .ok_or_else(|| PostStylesError::invalid_post(POST_ID))?;
    if verbose && !styles.registry().contains(&sanitize_key(&args.style)) {
        println!("⚠️  '{}' is not a registered style, using {}", args.style, style);
    }

    let context = RenderContext {
        single_view: args.single,
    };
    let format_start = Instant::now();
    let formatted = styles.format_content(&repo, &content, POST_ID, &context);
    let format_time = format_start.elapsed();

    let rendered = match args.format {
        OutputFormat::Html => formatted,
        OutputFormat::Json => {
            let transcript = (style == StyleKey::Chat.as_str())
                .then(|| parse_chat(&content, styles.dialects()))
                .filter(|transcript| !transcript.is_empty());
            let report = FormatReport {
                label: styles.style_label(&style).to_string(),
                style,
                content: formatted,
                transcript,
            };
            serde_json::to_string_pretty(&report)?
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("✅ Done! Output saved to {}", path);
            println!();
            println!("⚡ Performance:");
            println!("   Format time: {:.3}ms", format_time.as_secs_f64() * 1000.0);
            println!("   Total time:  {:.3}ms", total_start.elapsed().as_secs_f64() * 1000.0);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(input)?)
}
