// Rust guideline compliant 2026-10-19

//! Integration tests for the Markdown-to-PDF hook.
//!
//! The conversion tool is a `sh` script wired in through `.mdpdf.toml`
//! (`converter = "sh"`, `converter_args = [script]`).

#![cfg(unix)]

use clap::Parser;
use mdpdf_hooks::{generate_md_pdfs_hook, Cli, TerminalReporter};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use termcolor::NoColor;

/// Logs its arguments, fails for sources containing "report", otherwise
/// writes an empty PDF.
const FAKE_MARP: &str = r#"
echo "$@" >> "$(dirname "$0")/calls.log"
case "$2" in
  *report*) echo "theme not found" >&2; exit 2 ;;
esac
: > "$4"
exit 0
"#;

/// Sets up a working directory with a fake tool and a config pointing at it.
fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = temp_dir.path().join("fake-marp.sh");
    fs::write(&script, FAKE_MARP).expect("Failed to write fake tool");
    let config = format!(
        "converter = \"sh\"\nconverter_args = [\"{}\"]\n",
        script.display()
    );
    fs::write(temp_dir.path().join(".mdpdf.toml"), config).expect("Failed to write config");
    temp_dir
}

fn calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn run_hook(dir: &Path, args: &[&str]) -> (i32, String) {
    let mut argv = vec!["generate-md-pdfs"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("Failed to parse args");
    let mut reporter = TerminalReporter::new(NoColor::new(Vec::new()));
    let code = generate_md_pdfs_hook(&cli, dir, &mut reporter).expect("Hook failed");
    let out = String::from_utf8(reporter.into_inner().into_inner()).expect("Output not UTF-8");
    (code, out)
}

fn run_binary(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-md-pdfs"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("MDPDF_CONVERTER")
        .env_remove("MDPDF_THEME")
        .output()
        .expect("Failed to run binary")
}

#[test]
fn test_hook_converts_markdown_and_skips_others() {
    let repo = setup_repo();
    let dir = repo.path();
    let a = dir.join("a.md").display().to_string();
    let b = dir.join("b.txt").display().to_string();
    let c = dir.join("c.md").display().to_string();

    let (code, out) = run_hook(dir, &[&a, &b, &c]);

    assert_eq!(code, 0);
    assert!(dir.join("a.pdf").exists());
    assert!(dir.join("c.pdf").exists());
    assert!(!dir.join("b.pdf").exists());
    assert_eq!(calls(dir).len(), 2);
    assert!(out.contains("Summary: 2 converted, 0 failed"));
}

#[test]
fn test_hook_pattern_without_match_does_nothing() {
    let repo = setup_repo();
    let dir = repo.path();

    let (code, out) = run_hook(dir, &["notes.md", "--pattern", "^final"]);

    assert_eq!(code, 0);
    assert!(calls(dir).is_empty());
    assert_eq!(out, "");
}

#[test]
fn test_hook_reports_failure() {
    let repo = setup_repo();
    let dir = repo.path();
    let report = dir.join("report.md").display().to_string();

    let (code, out) = run_hook(dir, &[&report]);

    assert_eq!(code, 1);
    assert!(out.contains("report.md"));
    assert!(out.contains("theme not found"));
}

#[test]
fn test_hook_passes_css_as_theme() {
    let repo = setup_repo();
    let dir = repo.path();
    let slides = dir.join("slides.md").display().to_string();

    let (code, _) = run_hook(dir, &[&slides, "--css", "theme.css"]);

    assert_eq!(code, 0);
    let calls = calls(dir);
    assert_eq!(calls.len(), 1);
    assert!(calls[0].ends_with("--theme theme.css"));
}

#[test]
fn test_hook_uses_configured_theme_when_css_absent() {
    let repo = setup_repo();
    let dir = repo.path();
    let config_path = dir.join(".mdpdf.toml");
    let mut config = fs::read_to_string(&config_path).expect("Failed to read config");
    config.push_str("theme = \"gaia\"\n");
    let explicit = dir.join("explicit.toml");
    fs::write(&explicit, config).expect("Failed to write config");
    let slides = dir.join("slides.md").display().to_string();

    let explicit_arg = explicit.display().to_string();
    let (code, _) = run_hook(dir, &[&slides, "--config", &explicit_arg]);

    assert_eq!(code, 0);
    assert!(calls(dir)[0].ends_with("--theme gaia"));
}

#[test]
fn test_hook_css_overrides_configured_theme() {
    let repo = setup_repo();
    let dir = repo.path();
    let config_path = dir.join(".mdpdf.toml");
    let mut config = fs::read_to_string(&config_path).expect("Failed to read config");
    config.push_str("theme = \"gaia\"\n");
    fs::write(&config_path, config).expect("Failed to write config");
    let slides = dir.join("slides.md").display().to_string();

    let (code, _) = run_hook(dir, &[&slides, "--css", "theme.css"]);

    assert_eq!(code, 0);
    let calls = calls(dir);
    assert_eq!(calls.len(), 1);
    assert!(calls[0].ends_with("--theme theme.css"), "Unexpected call: {}", calls[0]);
    assert!(!calls[0].contains("gaia"));
}

#[test]
fn test_hook_empty_css_passes_no_theme() {
    let repo = setup_repo();
    let dir = repo.path();
    let slides = dir.join("slides.md").display().to_string();
    let pdf = dir.join("slides.pdf").display().to_string();

    let (code, out) = run_hook(dir, &[&slides, "--css", ""]);

    assert_eq!(code, 0);
    let calls = calls(dir);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], format!("--pdf {} -o {}", slides, pdf));
    assert!(out.contains("Converting"));
    assert!(!out.contains("custom CSS template"));
}

#[test]
fn test_hook_lookahead_pattern_skips_drafts() {
    let repo = setup_repo();
    let dir = repo.path();
    let draft = dir.join("draft-notes.md").display().to_string();
    let final_notes = dir.join("notes.md").display().to_string();

    let (code, _) = run_hook(dir, &[&draft, &final_notes, "-p", "/(?!draft)[^/]*$"]);

    assert_eq!(code, 0);
    assert!(dir.join("notes.pdf").exists());
    assert!(!dir.join("draft-notes.pdf").exists());
    assert_eq!(calls(dir).len(), 1);
}

#[test]
fn test_hook_missing_converter_fails_file_not_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();

    let (code, out) = run_hook(
        dir,
        &["a.md", "--converter", "mdpdf-definitely-not-installed-tool"],
    );

    assert_eq!(code, 1);
    assert!(out.contains("Error converting a.md to PDF"));
}

#[test]
fn test_binary_exit_codes() {
    let repo = setup_repo();
    let dir = repo.path();

    let output = run_binary(dir, &[]);
    assert_eq!(output.status.code(), Some(0));

    let output = run_binary(dir, &["a.md", "report.md"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully converted a.md to a.pdf"));
    assert!(stdout.contains("theme not found"));
    assert!(dir.join("a.pdf").exists());
}

#[test]
fn test_binary_rejects_invalid_pattern() {
    let repo = setup_repo();
    let dir = repo.path();

    let output = run_binary(dir, &["a.md", "--pattern", "(unclosed"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(calls(dir).is_empty(), "No conversion should be attempted");
}

#[test]
fn test_binary_rejects_missing_flag_value() {
    let repo = setup_repo();
    let output = run_binary(repo.path(), &["a.md", "--css"]);
    assert_eq!(output.status.code(), Some(2));
}
