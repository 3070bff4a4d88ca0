// Rust guideline compliant 2026-10-19

//! Sequential dispatch of Markdown files to a converter.

use crate::converter::{ConversionOutcome, Converter};
use crate::request::{FileFilter, InvocationRequest};
use crate::Result;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Receives user-facing messages while files are processed.
///
/// A write error ends the run: the dispatcher returns it as [`crate::Error::Io`].
pub trait Reporter {
    /// A file was selected and is about to be converted.
    fn converting(&mut self, source: &str, theme: Option<&str>) -> io::Result<()>;

    /// The conversion tool succeeded.
    fn converted(&mut self, source: &str, destination: &Path) -> io::Result<()>;

    /// The conversion tool failed; `diagnostic` is its decoded error stream.
    fn failed(&mut self, source: &str, diagnostic: &str) -> io::Result<()>;
}

/// Reporter that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn converting(&mut self, _source: &str, _theme: Option<&str>) -> io::Result<()> {
        Ok(())
    }

    fn converted(&mut self, _source: &str, _destination: &Path) -> io::Result<()> {
        Ok(())
    }

    fn failed(&mut self, _source: &str, _diagnostic: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Tally of one dispatch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Files converted successfully, in processing order.
    pub converted: Vec<String>,
    /// Files whose conversion failed, in processing order.
    pub failed: Vec<String>,
    /// Candidates that were not selected.
    pub skipped: usize,
}

impl DispatchSummary {
    /// Number of files handed to the converter.
    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Returns true if any conversion failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Process exit code: 1 if any conversion failed, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}

/// Converts every selected Markdown file in the request.
///
/// Files are processed in the order supplied. A failed conversion is recorded
/// and processing continues with the next file.
///
/// # Errors
///
/// Returns an error if:
/// - The request's pattern does not compile; no conversion is attempted
/// - The reporter fails to write a message
pub fn process_markdown_files<C, R>(
    request: &InvocationRequest,
    converter: &C,
    reporter: &mut R,
) -> Result<DispatchSummary>
where
    C: Converter + ?Sized,
    R: Reporter + ?Sized,
{
    let filter = FileFilter::new(request.pattern.as_deref())?;
    let theme = request.css.as_deref();
    let mut summary = DispatchSummary::default();

    for filename in filter.select(&request.filenames) {
        reporter.converting(filename, theme)?;
        match converter.convert(filename, theme) {
            ConversionOutcome::Converted { destination } => {
                reporter.converted(filename, &destination)?;
                summary.converted.push(filename.to_string());
            }
            ConversionOutcome::Failed {
                diagnostic,
                exit_code,
            } => {
                warn!(file = %filename, ?exit_code, "Conversion failed");
                reporter.failed(filename, &diagnostic)?;
                summary.failed.push(filename.to_string());
            }
        }
    }

    summary.skipped = request.filenames.len() - summary.attempted();

    info!(
        converted = summary.converted.len(),
        failed = summary.failed.len(),
        skipped = summary.skipped,
        "Markdown conversion finished"
    );
    Ok(summary)
}
