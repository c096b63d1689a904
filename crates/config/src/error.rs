//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during board
//! option loading, parsing, and persistence.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read an options file.
    #[error("failed to read options file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an options file.
    #[error("failed to write options file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 options.
    #[error("failed to parse options: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize options to JSON.
    #[error("failed to serialize options: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
