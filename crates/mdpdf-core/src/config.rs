// Rust guideline compliant 2026-10-19

//! Configuration management for mdpdf.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the per-repository configuration file.
pub const CONFIG_FILE_NAME: &str = ".mdpdf.toml";

/// Environment variable overriding [`Config::converter`].
pub const ENV_CONVERTER: &str = "MDPDF_CONVERTER";

/// Environment variable overriding [`Config::theme`].
pub const ENV_THEME: &str = "MDPDF_THEME";

/// Configuration for the conversion tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Program used to convert Markdown to PDF.
    #[serde(default = "default_converter")]
    pub converter: String,

    /// Arguments placed before the conversion arguments, e.g. the package name
    /// when the tool is launched through `npx`.
    #[serde(default)]
    pub converter_args: Vec<String>,

    /// Default style template passed as `--theme` when none is given on the
    /// command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Default conversion tool.
fn default_converter() -> String {
    "marp".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            converter: default_converter(),
            converter_args: Vec::new(),
            theme: None,
        }
    }
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/.mdpdf.toml`, if present
    /// 3. Environment variables with `MDPDF_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };
        config.finish(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an explicit file, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or invalid.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::read_file(path)?.finish(|key| std::env::var(key).ok())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            crate::Error::InvalidConfig(format!("{}: {}", path.display(), e))
        })
    }

    fn finish<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_overrides(lookup);
        self.validate()?;
        Ok(self)
    }

    /// Applies `MDPDF_*` overrides using the given variable lookup.
    ///
    /// Supported variables:
    /// - `MDPDF_CONVERTER` - Conversion program
    /// - `MDPDF_THEME` - Default style template; an empty value clears it
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_CONVERTER) {
            self.converter = val;
        }

        if let Some(val) = lookup(ENV_THEME) {
            self.theme = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `converter` is empty or only whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.converter.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "converter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Saves the configuration to `<dir>/.mdpdf.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}
