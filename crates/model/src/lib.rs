//! Board data model for driftboard.
//!
//! This crate defines the entities of a Kanban board (cards, columns,
//! swimlanes), the group abstraction within which card ordering is dense,
//! and the [`BoardSnapshot`] that owns the authoritative collections for
//! a board session.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: the card entity and its identifier
//! - [`column`]: the column entity, WIP limit and drop gate
//! - [`swimlane`]: the swimlane entity
//! - [`group`]: the `(column, swimlane)` group key
//! - [`snapshot`]: the authoritative board snapshot and derived views
//! - [`error`]: error types for model operations
//!
//! # Ordering invariant
//!
//! For every group (the set of cards sharing a `(column, swimlane)`
//! pair) the `order` values form a dense zero-based sequence `0..n-1`
//! with no gaps or duplicates. The same holds for column and swimlane
//! `order` values board-wide. [`BoardSnapshot::check_density`] validates
//! the invariant for tests and debug assertions.
//!
//! # Example
//!
//! ```
//! use driftboard_model::{BoardSnapshot, Card, Column, GroupKey};
//!
//! let mut snapshot = BoardSnapshot::new();
//! let column = Column::new("To Do");
//! let column_id = column.id;
//! snapshot.add_column(column);
//! snapshot.add_card(Card::new("Ship it", column_id));
//!
//! let cards = snapshot.cards_in_group(&GroupKey::new(column_id));
//! assert_eq!(cards[0].title, "Ship it");
//! ```

pub mod card;
pub mod column;
pub mod error;
pub mod group;
pub mod snapshot;
pub mod swimlane;

// Re-export primary types at crate root for convenience
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use error::{ModelError, Result};
pub use group::{GroupKey, Grouping};
pub use snapshot::BoardSnapshot;
pub use swimlane::{Swimlane, SwimlaneId};
