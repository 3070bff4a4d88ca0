// Rust guideline compliant 2026-10-19

//! Pre-commit hook implementation.
//!
//! Converts the Markdown files passed by the hook runner into PDFs and reports
//! whether every conversion succeeded.

use crate::cli::Cli;
use crate::terminal::TerminalReporter;
use anyhow::{Context, Result};
use mdpdf_core::{process_markdown_files, Config, ExternalConverter, InvocationRequest};
use std::path::Path;
use termcolor::WriteColor;
use tracing::debug;

/// Runs the Markdown-to-PDF hook.
///
/// # Arguments
///
/// * `cli` - Parsed command-line arguments
/// * `working_dir` - Directory searched for `.mdpdf.toml` when `--config` is not given
/// * `reporter` - Destination for progress and diagnostics
///
/// # Returns
///
/// The process exit code: 0 if every selected file converted (or none were
/// selected), 1 if any conversion failed.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read or is invalid
/// - The pattern does not compile
/// - The report cannot be written to the terminal
pub fn generate_md_pdfs_hook<W: WriteColor>(
    cli: &Cli,
    working_dir: &Path,
    reporter: &mut TerminalReporter<W>,
) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(working_dir).context("Failed to load config")?,
    };
    if let Some(converter) = &cli.converter {
        config.converter = converter.clone();
        config.validate()?;
    }
    debug!(?config, "Resolved configuration");

    let request = InvocationRequest {
        filenames: cli.filenames.clone(),
        pattern: cli.pattern.clone(),
        css: resolve_theme(cli.css.as_deref(), config.theme.as_deref()),
    };
    let converter = ExternalConverter::from_config(&config);

    let summary = process_markdown_files(&request, &converter, reporter)?;
    reporter.summary(&summary)?;
    Ok(summary.exit_code())
}

/// Picks the style template: `--css` first, then the configured theme.
///
/// An empty value means "no theme" and the tool gets no `--theme` option.
/// An empty `--css` does not fall back to the configured theme.
fn resolve_theme(css: Option<&str>, configured: Option<&str>) -> Option<String> {
    css.or(configured)
        .filter(|theme| !theme.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_wins_over_configured_theme() {
        assert_eq!(
            resolve_theme(Some("theme.css"), Some("gaia")).as_deref(),
            Some("theme.css")
        );
    }

    #[test]
    fn test_configured_theme_used_without_css() {
        assert_eq!(resolve_theme(None, Some("gaia")).as_deref(), Some("gaia"));
        assert_eq!(resolve_theme(None, None), None);
    }

    #[test]
    fn test_empty_theme_means_none() {
        assert_eq!(resolve_theme(Some(""), None), None);
        assert_eq!(resolve_theme(Some(""), Some("gaia")), None);
        assert_eq!(resolve_theme(None, Some("")), None);
    }
}
