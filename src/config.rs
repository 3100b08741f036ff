//! Configuration management and validation.
//!
//! Provides the pipeline configuration structure with defaults drawn from
//! [`crate::constants`] and layered overrides from CLI arguments.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_LABEL_COLUMN, DEFAULT_VALUE_COLUMN, EXPECTED_MEDIA_TYPE, LABEL_HEADER_HINTS,
    VALUE_HEADER_HINTS,
};
use crate::{Error, Result};

/// Pipeline configuration for attachment summarizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Media type the decoded attachment must carry
    pub expected_media_type: String,

    /// Fallback column index for the record label
    pub label_column: usize,

    /// Fallback column index for the numeric value
    pub value_column: usize,

    /// Lowercase substrings matched against header names for the label role
    pub label_header_hints: Vec<String>,

    /// Lowercase substrings matched against header names for the value role
    pub value_header_hints: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_media_type: EXPECTED_MEDIA_TYPE.to_string(),
            label_column: DEFAULT_LABEL_COLUMN,
            value_column: DEFAULT_VALUE_COLUMN,
            label_header_hints: LABEL_HEADER_HINTS.iter().map(|s| s.to_string()).collect(),
            value_header_hints: VALUE_HEADER_HINTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Build a configuration from defaults layered with CLI overrides
    pub fn from_overrides(
        media_type: Option<&str>,
        label_column: Option<usize>,
        value_column: Option<usize>,
    ) -> Result<Self> {
        let mut config = Config::default();

        if let Some(media_type) = media_type {
            config.expected_media_type = media_type.to_string();
        }
        if let Some(label_column) = label_column {
            config.label_column = label_column;
        }
        if let Some(value_column) = value_column {
            config.value_column = value_column;
        }

        config.validate()?;
        debug!("Resolved configuration: {:?}", config);

        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.expected_media_type.trim().is_empty() {
            return Err(Error::configuration(
                "Expected media type cannot be empty".to_string(),
            ));
        }

        if self.label_header_hints.is_empty() || self.value_header_hints.is_empty() {
            return Err(Error::configuration(
                "Header hint lists cannot be empty".to_string(),
            ));
        }

        // Hints are matched against lowercased header names
        for hint in self
            .label_header_hints
            .iter()
            .chain(self.value_header_hints.iter())
        {
            if hint.is_empty() || *hint != hint.to_lowercase() {
                return Err(Error::configuration(format!(
                    "Header hint must be non-empty lowercase: '{}'",
                    hint
                )));
            }
        }

        Ok(())
    }
}
