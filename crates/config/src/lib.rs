//! Configuration for driftboard boards.
//!
//! This crate defines the behavioral options a host can set on a board
//! and handles loading and persisting them.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`options`]: the recognized board options and their defaults
//! - [`persistence`]: options file reading and writing
//! - [`error`]: error types for configuration operations
//!
//! # Recognized options
//!
//! | Option | Effect |
//! |--------|--------|
//! | `enable_drag_drop` | Gate on beginning any card drag |
//! | `enable_column_drag` | Gate on beginning any column drag |
//! | `enable_card_reordering` | Gate on same-group position changes |
//! | `enable_swimlanes` | Whether cards are grouped by swimlane at all |
//!
//! All options default to enabled. Hosts may embed options directly:
//!
//! ```
//! use driftboard_config::BoardOptions;
//!
//! let options = BoardOptions {
//!     enable_column_drag: false,
//!     ..BoardOptions::default()
//! };
//! assert!(options.enable_drag_drop);
//! ```
//!
//! or load them from a JSON5 file:
//!
//! ```no_run
//! use driftboard_config::BoardOptions;
//!
//! # fn main() -> driftboard_config::Result<()> {
//! let options = BoardOptions::load_from("board.json5")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod options;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use error::{ConfigError, Result};
pub use options::BoardOptions;
