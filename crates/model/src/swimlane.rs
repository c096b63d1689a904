//! Swimlane-related types for the board.
//!
//! Swimlanes are a horizontal grouping dimension orthogonal to columns.
//! Boards may declare them explicitly; when they don't, the snapshot
//! derives an implicit list from the swimlane ids present on cards.

use serde::{Deserialize, Serialize};

/// Unique identifier for a swimlane.
///
/// Uses UUID v4 for globally unique identification.
pub type SwimlaneId = uuid::Uuid;

/// A swimlane on the board.
///
/// # Examples
///
/// ```
/// use driftboard_model::Swimlane;
///
/// let lane = Swimlane::new("Team Alpha");
/// assert_eq!(lane.title, "Team Alpha");
/// assert_eq!(lane.order, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swimlane {
    /// Unique identifier for this swimlane.
    pub id: SwimlaneId,
    /// Display title of the swimlane.
    pub title: String,
    /// Zero-based display position across all swimlanes.
    pub order: usize,
}

impl Swimlane {
    /// Creates a new swimlane with the given title at order `0`.
    ///
    /// Use [`BoardSnapshot::add_swimlane`](crate::BoardSnapshot::add_swimlane)
    /// to append it at the correct position.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SwimlaneId::new_v4(),
            title: title.into(),
            order: 0,
        }
    }

    /// Creates a new swimlane with a specific ID.
    ///
    /// Useful for testing or when recreating swimlanes from host storage.
    #[must_use]
    pub fn with_id(id: SwimlaneId, title: impl Into<String>) -> Self {
        Self {
            id,
            ..Self::new(title)
        }
    }
}
