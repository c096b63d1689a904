//! Recognized board options.
//!
//! This module provides the [`BoardOptions`] struct which aggregates the
//! behavioral gates a host can set on a board: whether card and column
//! drags are enabled at all, whether cards may be reordered within their
//! own group, and whether the board groups cards by swimlane.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Behavioral gates for a board.
///
/// Every gate defaults to enabled; hosts switch individual behaviors off.
/// Options are fixed for the lifetime of a controller.
///
/// # Examples
///
/// ```
/// use driftboard_config::BoardOptions;
///
/// // Everything on by default
/// let options = BoardOptions::default();
/// assert!(options.enable_drag_drop);
///
/// // A read-only board
/// let options = BoardOptions {
///     enable_drag_drop: false,
///     enable_column_drag: false,
///     ..BoardOptions::default()
/// };
/// assert!(!options.enable_drag_drop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardOptions {
    /// Gate on beginning any card drag.
    pub enable_drag_drop: bool,

    /// Gate on beginning any column drag.
    pub enable_column_drag: bool,

    /// Gate on same-group position changes.
    ///
    /// When off, cards can only be dropped into a different group;
    /// reordering within the current group is rejected.
    pub enable_card_reordering: bool,

    /// Whether cards are grouped by swimlane at all.
    ///
    /// When off, all cards are treated as one implicit swimlane and the
    /// swimlane component of any drop target is ignored.
    pub enable_swimlanes: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            enable_drag_drop: true,
            enable_column_drag: true,
            enable_card_reordering: true,
            enable_swimlanes: true,
        }
    }
}

impl BoardOptions {
    /// Creates options with every gate enabled.
    ///
    /// This is equivalent to `BoardOptions::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON5 (or plain JSON) string.
    ///
    /// Unknown gates are absent fields; they keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_config::BoardOptions;
    ///
    /// let options = BoardOptions::from_json5(
    ///     r#"{
    ///         // Column layout is fixed for this board
    ///         enable_column_drag: false,
    ///     }"#,
    /// ).unwrap();
    /// assert!(!options.enable_column_drag);
    /// assert!(options.enable_drag_drop);
    /// ```
    pub fn from_json5(content: &str) -> Result<Self> {
        Ok(serde_json5::from_str(content)?)
    }

    /// Loads options from a file.
    ///
    /// Supports JSON5 and plain JSON. If the file does not exist, returns
    /// the defaults rather than an error: an absent options file means an
    /// unconfigured board.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use driftboard_config::BoardOptions;
    ///
    /// # fn main() -> driftboard_config::Result<()> {
    /// let options = BoardOptions::load_from("board.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        crate::persistence::read_options_file(path)
    }

    /// Saves the options to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        crate::persistence::write_options_file(path, self)
    }
}
