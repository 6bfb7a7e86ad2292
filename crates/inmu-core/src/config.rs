//! Service configuration
//!
//! Hosts pass settings as a JSON object (LSP `initializationOptions` style).
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::{DEFAULT_MAX_PROBLEMS, DEFAULT_SOURCE};
use crate::format::{FormattingOptions, DEFAULT_TAB_SIZE};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Settings for diagnostics and formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Source tag attached to diagnostics
    pub diagnostic_source: String,
    /// Cap on diagnostics per document
    pub max_number_of_problems: usize,
    /// Default indent width for formatting
    pub tab_size: u32,
    /// Indent with spaces instead of tabs
    pub insert_spaces: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            diagnostic_source: DEFAULT_SOURCE.to_string(),
            max_number_of_problems: DEFAULT_MAX_PROBLEMS,
            tab_size: DEFAULT_TAB_SIZE,
            insert_spaces: true,
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagnostic source tag
    #[must_use]
    pub fn with_diagnostic_source(mut self, source: impl Into<String>) -> Self {
        self.diagnostic_source = source.into();
        self
    }

    /// Set the per-document diagnostic cap
    #[must_use]
    pub fn with_max_number_of_problems(mut self, max: usize) -> Self {
        self.max_number_of_problems = max;
        self
    }

    /// Set the default formatting options
    #[must_use]
    pub fn with_formatting(mut self, options: FormattingOptions) -> Self {
        self.tab_size = options.tab_size;
        self.insert_spaces = options.insert_spaces;
        self
    }

    /// Parse a JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a key has the
    /// wrong type.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build from an already parsed JSON value.
    ///
    /// `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a key has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Formatting options derived from this configuration
    #[must_use]
    pub fn formatting_options(&self) -> FormattingOptions {
        FormattingOptions::new(self.tab_size, self.insert_spaces)
    }
}
