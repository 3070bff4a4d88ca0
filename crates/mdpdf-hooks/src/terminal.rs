// Rust guideline compliant 2026-10-19

//! Terminal reporting for the hook.
//!
//! Progress, success and failure lines are written to stdout with an optional
//! colored status prefix.

use mdpdf_core::{DispatchSummary, Reporter};
use std::env;
use std::io;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the `--no-color` flag, the NO_COLOR environment variable and
/// whether stdout is a TTY.
pub fn should_use_color(no_color_flag: bool) -> bool {
    if no_color_flag || env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Reporter that prints conversion progress to a color-capable writer.
pub struct TerminalReporter<W: WriteColor> {
    out: W,
}

impl TerminalReporter<StandardStream> {
    /// Creates a reporter writing to stdout.
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TerminalReporter<W> {
    /// Creates a reporter over any color-capable writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the end-of-run tally. Nothing is printed if no file was selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn summary(&mut self, summary: &DispatchSummary) -> io::Result<()> {
        if summary.attempted() == 0 {
            return Ok(());
        }
        let color = if summary.has_failures() {
            Color::Red
        } else {
            Color::Green
        };
        let message = format!(
            "{} converted, {} failed",
            summary.converted.len(),
            summary.failed.len()
        );
        self.status("Summary", color, &message)
    }

    fn status(&mut self, prefix: &str, prefix_color: Color, message: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true))?;
        write!(self.out, "{}: ", prefix)?;
        self.out.reset()?;
        writeln!(self.out, "{}", message)
    }
}

impl<W: WriteColor> Reporter for TerminalReporter<W> {
    fn converting(&mut self, source: &str, theme: Option<&str>) -> io::Result<()> {
        match theme {
            Some(theme) => writeln!(
                self.out,
                "Converting {} to PDF with custom CSS template {}...",
                source, theme
            ),
            None => writeln!(self.out, "Converting {} to PDF...", source),
        }
    }

    fn converted(&mut self, source: &str, destination: &Path) -> io::Result<()> {
        let message = format!(
            "Successfully converted {} to {}",
            source,
            destination.display()
        );
        self.status("✓", Color::Green, &message)
    }

    fn failed(&mut self, source: &str, diagnostic: &str) -> io::Result<()> {
        self.status("✗", Color::Red, &format!("Error converting {} to PDF:", source))?;
        let diagnostic = diagnostic.trim_end();
        if !diagnostic.is_empty() {
            writeln!(self.out, "{}", diagnostic)?;
        }
        Ok(())
    }
}
