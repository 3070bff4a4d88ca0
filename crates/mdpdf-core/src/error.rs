// Rust guideline compliant 2026-10-19

//! Error types for the mdpdf core library.

use thiserror::Error;

/// Result type alias for mdpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mdpdf operations.
///
/// Per-file conversion failures are not errors: they are reported as
/// [`crate::ConversionOutcome::Failed`] and tallied by the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file selection pattern is not a valid regular expression.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] fancy_regex::Error),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
