//! Options file reading and writing.
//!
//! This module handles loading board options from files and saving them
//! back.
//!
//! # File Formats
//!
//! The module supports both JSON5 and JSON formats:
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! Hosts pass explicit paths; the engine does not search user-level
//! configuration directories.

use std::path::Path;

use crate::error::{ConfigError, Result};

/// Reads and parses an options file.
///
/// Supports both JSON5 and JSON formats.
///
/// # Arguments
///
/// * `path` - The path to the options file
///
/// # Type Parameters
///
/// * `T` - The type to deserialize into (must implement `serde::Deserialize`)
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use driftboard_config::BoardOptions;
/// use driftboard_config::persistence::read_options_file;
///
/// # fn main() -> driftboard_config::Result<()> {
/// let options: BoardOptions = read_options_file("board.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_options_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes options to a file.
///
/// The options are written as pretty-printed JSON (not JSON5, as
/// serde_json5 doesn't support serialization to JSON5 format).
///
/// # Arguments
///
/// * `path` - The path to write to
/// * `options` - The options to write
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The options cannot be serialized
///
/// # Examples
///
/// ```no_run
/// use driftboard_config::BoardOptions;
/// use driftboard_config::persistence::write_options_file;
///
/// # fn main() -> driftboard_config::Result<()> {
/// let options = BoardOptions::default();
/// write_options_file("board.json", &options)?;
/// # Ok(())
/// # }
/// ```
pub fn write_options_file<T: serde::Serialize>(path: impl AsRef<Path>, options: &T) -> Result<()> {
    let path = path.as_ref();

    // Create parent directories if needed
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    // Serialize to pretty JSON
    let content = serde_json::to_string_pretty(options)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
