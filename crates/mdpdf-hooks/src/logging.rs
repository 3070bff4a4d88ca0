// Rust guideline compliant 2026-10-19

//! Tracing setup for the hook binary.
//!
//! Logs go to stderr so they never mix with the conversion report on stdout.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global `fmt` subscriber at the given level.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the level name is not recognised.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info, or debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
