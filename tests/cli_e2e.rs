//! End-to-end CLI tests for poststyles.
//!
//! These tests run the actual binary with various arguments and check the
//! output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Each extractor family works via CLI
//! - **Output formats**: HTML and JSON generation
//! - **Flags**: `--single`, `--disabled`, `--config`
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with post bodies for each style family.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(
        dir.path().join("chat.txt"),
        "Scott: Hey, let's chat!\nHelen: No.\n\nWell, that went well.",
    )
    .unwrap();

    fs::write(
        dir.path().join("skype.txt"),
        "[10:02] Alice: hi\n[10:03] Bob: hey",
    )
    .unwrap();

    fs::write(
        dir.path().join("quote.html"),
        "<p>As they say:</p>\n<blockquote><p>Less is more.</p></blockquote>\n<p>Indeed.</p>",
    )
    .unwrap();

    fs::write(
        dir.path().join("video.html"),
        "Watch this: [video src=\"clip.mp4\"] and enjoy.",
    )
    .unwrap();

    fs::write(
        dir.path().join("prose.txt"),
        "Just some prose with no colons.",
    )
    .unwrap();

    fs::write(
        dir.path().join("config.json"),
        r#"{"formatting_enabled": false, "supported_post_types": ["post", "page"]}"#,
    )
    .unwrap();

    fs::write(dir.path().join("bad_config.json"), "{ not json").unwrap();

    dir
}

fn poststyles_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_poststyles"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_chat_to_stdout() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["chat", fixture(&fixtures, "chat.txt").as_str()])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<dl class=\"chat\">"))
            .stdout(predicate::str::contains("<cite class=\"fn\">Helen</cite>"))
            .stdout(predicate::str::contains("went well").not());
    }

    #[test]
    fn test_skype_times() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["chat", fixture(&fixtures, "skype.txt").as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "<time class=\"chat-timestamp\">[10:02]</time>",
            ));
    }

    #[test]
    fn test_quote() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["quote", fixture(&fixtures, "quote.html").as_str()])
            .assert()
            .success()
            .stdout("<blockquote><p>Less is more.</p></blockquote>\n");
    }

    #[test]
    fn test_video_renders_player() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["video", fixture(&fixtures, "video.html").as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "<video class=\"wp-video-shortcode\" controls src=\"clip.mp4\"></video>",
            ))
            .stdout(predicate::str::contains("enjoy").not());
    }

    #[test]
    fn test_stdin_input() {
        poststyles_cmd()
            .args(["link", "-"])
            .write_stdin("Read <a href=\"https://a.example\">this</a> now")
            .assert()
            .success()
            .stdout("<a href=\"https://a.example\">this</a>\n");
    }

    #[test]
    fn test_non_chat_content_passes_through() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["chat", fixture(&fixtures, "prose.txt").as_str()])
            .assert()
            .success()
            .stdout("Just some prose with no colons.\n");
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_output_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.html");

        poststyles_cmd()
            .args([
                "quote",
                fixture(&fixtures, "quote.html").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "<blockquote><p>Less is more.</p></blockquote>");
    }

    #[test]
    fn test_standard_style_is_not_reported_as_unregistered() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "standard.html");

        poststyles_cmd()
            .args([
                "standard",
                fixture(&fixtures, "prose.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("not a registered style").not());
    }

    #[test]
    fn test_unregistered_style_is_reported() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "bogus.html");

        poststyles_cmd()
            .args([
                "bogus",
                fixture(&fixtures, "prose.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("'bogus' is not a registered style"));
    }

    #[test]
    fn test_json_report_for_chat() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        poststyles_cmd()
            .args([
                "chat",
                fixture(&fixtures, "chat.txt").as_str(),
                "--format",
                "json",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(report["style"], "chat");
        assert_eq!(report["label"], "Chat");
        assert_eq!(report["transcript"][0][0]["author"], "Scott");
        assert_eq!(report["transcript"][0][1]["message"], "No.");
        assert!(report["content"].as_str().unwrap().starts_with("<dl"));
    }

    #[test]
    fn test_json_report_without_transcript() {
        let fixtures = setup_fixtures();

        let assert = poststyles_cmd()
            .args(["quote", fixture(&fixtures, "quote.html").as_str(), "-f", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(report["style"], "quote");
        assert!(report.get("transcript").is_none());
    }

    #[test]
    fn test_unregistered_style_reports_post_type() {
        let fixtures = setup_fixtures();

        let assert = poststyles_cmd()
            .args(["bogus", fixture(&fixtures, "quote.html").as_str(), "-f", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(report["style"], "post");
        assert_eq!(report["label"], "");
    }
}

// ============================================================================
// Flag Tests
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_single_view_leaves_content() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["quote", fixture(&fixtures, "quote.html").as_str(), "--single"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<p>Indeed.</p>"));
    }

    #[test]
    fn test_disabled_leaves_content() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["chat", fixture(&fixtures, "chat.txt").as_str(), "--disabled"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Well, that went well."));
    }

    #[test]
    fn test_config_file_is_loaded() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args([
                "quote",
                fixture(&fixtures, "quote.html").as_str(),
                "--config",
                fixture(&fixtures, "config.json").as_str(),
            ])
            .assert()
            .success()
            .stdout("<blockquote><p>Less is more.</p></blockquote>\n");
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        poststyles_cmd()
            .args(["chat", "/nonexistent/post.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_bad_config_file() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args([
                "chat",
                fixture(&fixtures, "chat.txt").as_str(),
                "--config",
                fixture(&fixtures, "bad_config.json").as_str(),
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("JSON error"));
    }

    #[test]
    fn test_unknown_format() {
        let fixtures = setup_fixtures();

        poststyles_cmd()
            .args(["chat", fixture(&fixtures, "chat.txt").as_str(), "-f", "csv"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_arguments() {
        poststyles_cmd().assert().failure();
    }
}

// ============================================================================
// Help and Version Tests
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help() {
        poststyles_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("--single"));
    }

    #[test]
    fn test_version() {
        poststyles_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
