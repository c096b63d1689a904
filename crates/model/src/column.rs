//! Column-related types for the board.
//!
//! Columns are the vertical groupings of the board. Each column has a
//! dense zero-based `order` across all columns, an advisory
//! work-in-progress limit, and a gate controlling whether cards may be
//! dropped into it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a column.
///
/// Uses UUID v4 for globally unique identification.
pub type ColumnId = uuid::Uuid;

const fn default_accepts_cards() -> bool {
    true
}

/// A column on the board.
///
/// # Examples
///
/// ```
/// use driftboard_model::Column;
///
/// let column = Column::new("In Progress");
/// assert!(column.accepts_cards);
/// assert!(column.wip_limit.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier for this column.
    pub id: ColumnId,
    /// Display title of the column.
    pub title: String,
    /// Zero-based display position across all columns.
    pub order: usize,
    /// Advisory maximum card count. Exceeding it flags the column as
    /// over limit but never blocks a move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<usize>,
    /// Whether cards may be dropped into this column.
    #[serde(default = "default_accepts_cards")]
    pub accepts_cards: bool,
    /// When `true`, the column is individually marked non-draggable.
    #[serde(default)]
    pub locked: bool,
}

impl Column {
    /// Creates a new column with the given title.
    ///
    /// The column starts at order `0`, accepts cards, and has no WIP
    /// limit; use [`BoardSnapshot::add_column`](crate::BoardSnapshot::add_column)
    /// to append it at the correct position.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::Column;
    ///
    /// let column = Column::new("Backlog");
    /// assert_eq!(column.title, "Backlog");
    /// assert_eq!(column.order, 0);
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new_v4(),
            title: title.into(),
            order: 0,
            wip_limit: None,
            accepts_cards: true,
            locked: false,
        }
    }

    /// Creates a new column with a specific ID.
    ///
    /// Useful for testing or when recreating columns from host storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Column, ColumnId};
    ///
    /// let id = ColumnId::new_v4();
    /// let column = Column::with_id(id, "Done");
    /// assert_eq!(column.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            ..Self::new(title)
        }
    }
}
