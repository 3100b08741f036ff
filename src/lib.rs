//! Sales Summarizer Library
//!
//! A Rust library for decoding data-URL CSV attachments and aggregating
//! sales figures from the embedded tabular payload.
//!
//! This library provides tools for:
//! - Parsing `data:` URLs into media type, encoding flag, and payload
//! - Transcoding base64 or percent-encoded payloads into text
//! - Heuristic delimited-text parsing with delimiter inference and
//!   header-row detection
//! - Resolving label/value column roles from header names
//! - Aggregating per-row values into a total with per-record summaries

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod column_resolver;
        pub mod csv_table;
        pub mod data_url;
        pub mod pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColumnRoles, DecodedResource, ParsedTable, SalesRecord, Summary};
pub use app::services::pipeline::SalesPipeline;
pub use config::Config;

/// Result type alias for the sales summarizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for attachment decoding and summarizing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input is not a well-formed data URL
    #[error("Malformed data URL: {message}")]
    MalformedUri { message: String },

    /// Decoded media type is not the type the caller processes
    #[error("Unsupported media type: expected '{expected}', found '{found}'")]
    UnsupportedMediaType { expected: String, found: String },

    /// Payload transcoding failed (base64 or percent decoding)
    #[error("Invalid payload encoding: {message}")]
    InvalidEncoding {
        message: String,
        #[source]
        source: Option<base64::DecodeError>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Result serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// I/O operation failed (CLI input reading only; the core does no I/O)
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a malformed data URL error
    pub fn malformed_uri(message: impl Into<String>) -> Self {
        Self::MalformedUri {
            message: message.into(),
        }
    }

    /// Create an unsupported media type error
    pub fn unsupported_media_type(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid encoding error without an underlying cause
    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid encoding error from a base64 decode failure
    pub fn base64_decoding(message: impl Into<String>, source: base64::DecodeError) -> Self {
        Self::InvalidEncoding {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Self {
        Self::InvalidEncoding {
            message: "base64 decoding failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Serialization failed".to_string(),
            source: error,
        }
    }
}
