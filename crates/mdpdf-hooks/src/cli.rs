// Rust guideline compliant 2026-10-19

//! Command-line arguments for the `generate-md-pdfs` hook.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "generate-md-pdfs",
    version,
    about = "Convert Markdown files to PDF with Marp",
    long_about = "Pre-commit hook that converts the Markdown files it is given into sibling PDFs using an external conversion tool (Marp CLI by default).",
    after_help = "Examples:\n  generate-md-pdfs docs/intro.md docs/guide.md\n  generate-md-pdfs --pattern '^slides/' --css themes/corporate.css slides/talk.md\n"
)]
pub struct Cli {
    /// Filenames to convert
    pub filenames: Vec<String>,

    /// Regex pattern to match files for conversion. Converts all *.md files if not specified.
    #[arg(short, long, value_parser = parse_pattern)]
    pub pattern: Option<String>,

    /// Custom CSS template path for Marp conversion.
    #[arg(long)]
    pub css: Option<String>,

    /// Conversion program to run instead of the configured one
    #[arg(long)]
    pub converter: Option<String>,

    /// Configuration file (defaults to .mdpdf.toml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_parser = ["error", "warn", "info", "debug"])]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Effective log level name.
    pub fn effective_log_level(&self) -> &str {
        match (&self.log_level, self.verbose) {
            (Some(level), _) => level.as_str(),
            (None, true) => "debug",
            (None, false) => "warn",
        }
    }
}

/// Rejects patterns that do not compile so they surface as usage errors.
fn parse_pattern(value: &str) -> Result<String, fancy_regex::Error> {
    fancy_regex::Regex::new(value)?;
    Ok(value.to_string())
}
