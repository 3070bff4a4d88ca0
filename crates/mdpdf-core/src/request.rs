// Rust guideline compliant 2026-10-19

//! Invocation requests and Markdown file selection.

use crate::Result;
use fancy_regex::Regex;
use tracing::warn;

/// Filename suffix identifying a Markdown file.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// One run of the hook: the candidate files and how to convert them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Candidate filenames, in the order supplied.
    pub filenames: Vec<String>,
    /// Optional regex; a file is selected only if it matches somewhere in the name.
    pub pattern: Option<String>,
    /// Optional style template passed through to the conversion tool.
    pub css: Option<String>,
}

impl InvocationRequest {
    /// Creates a request with no pattern and no style template.
    pub fn new(filenames: Vec<String>) -> Self {
        Self {
            filenames,
            pattern: None,
            css: None,
        }
    }

    /// Sets the selection pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the style template.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }
}

/// Compiled selection rule for candidate filenames.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    pattern: Option<Regex>,
}

impl FileFilter {
    /// Compiles the optional pattern once.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let pattern = pattern.map(Regex::new).transpose()?;
        Ok(Self { pattern })
    }

    /// Returns true if the file should be converted.
    ///
    /// The extension check is a plain suffix test on the name; the pattern is
    /// searched for anywhere in the name, not anchored to the whole string.
    /// A pattern that exceeds the backtracking limit on a name does not match it.
    pub fn matches(&self, filename: &str) -> bool {
        filename.ends_with(MARKDOWN_EXTENSION)
            && self.pattern.as_ref().is_none_or(|regex| {
                regex.is_match(filename).unwrap_or_else(|err| {
                    warn!(file = %filename, %err, "Pattern could not be evaluated");
                    false
                })
            })
    }

    /// Selects the matching filenames, preserving input order.
    pub fn select<'a>(&'a self, filenames: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        filenames
            .iter()
            .map(String::as_str)
            .filter(move |name| self.matches(name))
    }
}
