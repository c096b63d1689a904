//! Change notification payloads.
//!
//! This module defines the event types the engine hands to collaborators
//! after a gesture reaches a terminal state. Events are plain values
//! returned from controller calls in emission order; delivering them to a
//! rendering or persistence layer is the host's concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use driftboard_model::{BoardSnapshot, GroupKey};

/// The kind of subject a gesture operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    /// A card being moved between or within groups.
    Card,
    /// A column being reordered across the board.
    Column,
}

/// A position on the board a subject can occupy or be dropped at.
///
/// Cards are placed at an index within a group; columns at an index
/// within the board-wide column order.
///
/// # Examples
///
/// ```
/// use driftboard_engine::{Placement, SubjectKind};
/// use driftboard_model::{ColumnId, GroupKey};
///
/// let placement = Placement::Card {
///     group: GroupKey::new(ColumnId::new_v4()),
///     index: 2,
/// };
/// assert_eq!(placement.kind(), SubjectKind::Card);
/// assert_eq!(placement.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// A position within a card group.
    Card {
        /// The group containing the position.
        group: GroupKey,
        /// Zero-based index within the group's display order.
        index: usize,
    },
    /// A position within the board-wide column order.
    Column {
        /// Zero-based index within the column order.
        index: usize,
    },
}

impl Placement {
    /// Returns the subject kind this placement applies to.
    #[must_use]
    pub const fn kind(&self) -> SubjectKind {
        match self {
            Self::Card { .. } => SubjectKind::Card,
            Self::Column { .. } => SubjectKind::Column,
        }
    }

    /// Returns the index component of the placement.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Card { index, .. } | Self::Column { index } => *index,
        }
    }

    /// Returns the group component, if this is a card placement.
    #[must_use]
    pub const fn group(&self) -> Option<&GroupKey> {
        match self {
            Self::Card { group, .. } => Some(group),
            Self::Column { .. } => None,
        }
    }
}

/// A completed relocation of a card or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// The card or column that moved.
    pub subject_id: Uuid,
    /// Where the subject was before the move.
    pub from: Placement,
    /// Where the subject is after the move.
    pub to: Placement,
}

/// Events emitted by the board engine.
///
/// Emission rules per gesture:
///
/// - a successful `begin_drag` emits [`BoardEvent::DragStart`];
/// - a committed drop that changed state emits [`BoardEvent::Move`] and
///   [`BoardEvent::BoardChange`], in that order;
/// - every terminal transition emits [`BoardEvent::DragEnd`], whose
///   `success` flag reflects whether a commit occurred; a no-op commit
///   still succeeds, it just emits no move or board-change event.
///
/// # Examples
///
/// ```
/// use driftboard_engine::{BoardEvent, SubjectKind};
/// use uuid::Uuid;
///
/// let event = BoardEvent::DragEnd {
///     subject_id: Uuid::new_v4(),
///     kind: SubjectKind::Card,
///     success: false,
/// };
/// assert!(!event.is_move());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A drag gesture began.
    DragStart {
        /// The subject being dragged.
        subject_id: Uuid,
        /// Whether the subject is a card or a column.
        kind: SubjectKind,
    },
    /// A card or column was relocated.
    Move(MoveEvent),
    /// The board state changed; carries the full updated collections.
    BoardChange {
        /// The new authoritative snapshot.
        snapshot: BoardSnapshot,
    },
    /// A drag gesture reached a terminal state.
    DragEnd {
        /// The subject that was being dragged.
        subject_id: Uuid,
        /// Whether the subject is a card or a column.
        kind: SubjectKind,
        /// `true` iff the gesture committed (even as a no-op).
        success: bool,
    },
}

impl BoardEvent {
    /// Returns `true` if this is a move event.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// Returns `true` if this is a board-change event.
    #[must_use]
    pub const fn is_board_change(&self) -> bool {
        matches!(self, Self::BoardChange { .. })
    }

    /// Returns `true` if this is a drag-start or drag-end event.
    #[must_use]
    pub const fn is_drag_lifecycle(&self) -> bool {
        matches!(self, Self::DragStart { .. } | Self::DragEnd { .. })
    }
}
