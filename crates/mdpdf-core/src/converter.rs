// Rust guideline compliant 2026-10-19

//! External conversion tool invocation.
//!
//! Each conversion is a single blocking subprocess call. The exit status is
//! authoritative: zero means the PDF was produced, anything else is a failure
//! whose stderr becomes the diagnostic. There is no retry.

use crate::Config;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Result of converting one Markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The tool exited with status zero.
    Converted {
        /// Path the PDF was requested at.
        destination: PathBuf,
    },
    /// The tool exited non-zero or could not be launched.
    Failed {
        /// Decoded error stream, or the launch error.
        diagnostic: String,
        /// Exit code, if the tool ran and exited normally.
        exit_code: Option<i32>,
    },
}

impl ConversionOutcome {
    /// Returns true for [`ConversionOutcome::Converted`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Converts a single Markdown file to PDF.
pub trait Converter {
    /// Converts `source`, optionally applying the style template `theme`.
    ///
    /// Implementations report every failure through the outcome; they never
    /// panic or abort the run.
    fn convert(&self, source: &str, theme: Option<&str>) -> ConversionOutcome;
}

/// Returns the sibling PDF path for a source file.
///
/// Only the final extension is replaced: `a.b.md` becomes `a.b.pdf`. A name
/// with no extension, such as `.md`, gets `.pdf` appended.
pub fn pdf_destination(source: &str) -> PathBuf {
    Path::new(source).with_extension("pdf")
}

/// Converter that shells out to an external program such as Marp CLI.
///
/// The command line is
/// `<program> [leading args...] --pdf <source> -o <destination> [--theme <css>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalConverter {
    program: String,
    leading_args: Vec<String>,
}

impl ExternalConverter {
    /// Creates a converter that runs `program` directly.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Creates a converter from the configured program and leading arguments.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.converter.as_str()).with_leading_args(&config.converter_args)
    }

    /// Adds arguments placed before the conversion arguments.
    #[must_use]
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.leading_args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_string()));
        self
    }

    /// Program that will be launched.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the argument vector for one conversion.
    pub fn command_args(
        &self,
        source: &str,
        destination: &Path,
        theme: Option<&str>,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.leading_args.iter().map(OsString::from).collect();
        args.push("--pdf".into());
        args.push(source.into());
        args.push("-o".into());
        args.push(destination.as_os_str().to_owned());
        if let Some(theme) = theme {
            args.push("--theme".into());
            args.push(theme.into());
        }
        args
    }
}

impl Converter for ExternalConverter {
    fn convert(&self, source: &str, theme: Option<&str>) -> ConversionOutcome {
        let destination = pdf_destination(source);
        let args = self.command_args(source, &destination, theme);
        debug!(program = %self.program, ?args, "Running conversion tool");

        let output = match Command::new(&self.program).args(&args).output() {
            Ok(output) => output,
            Err(err) => {
                return ConversionOutcome::Failed {
                    diagnostic: format!("failed to run '{}': {}", self.program, err),
                    exit_code: None,
                }
            }
        };

        if output.status.success() {
            ConversionOutcome::Converted { destination }
        } else {
            ConversionOutcome::Failed {
                diagnostic: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
            }
        }
    }
}
