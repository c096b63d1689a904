//! Move commands for optimistic host integration.
//!
//! Hosts that persist moves to an external store typically apply the
//! move locally first and roll it back if persistence fails. A
//! [`MoveCommand`] captures one resolved move as a value carrying both
//! directions: the command built from a move event replays the move, and
//! its [`inverse`](MoveCommand::inverse) undoes it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::{MoveEvent, Placement, SubjectKind};

/// A replayable card or column move.
///
/// # Examples
///
/// ```
/// use driftboard_engine::{MoveCommand, Placement};
/// use uuid::Uuid;
///
/// let command = MoveCommand {
///     subject_id: Uuid::new_v4(),
///     from: Placement::Column { index: 0 },
///     to: Placement::Column { index: 3 },
/// };
/// let rollback = command.inverse();
/// assert_eq!(rollback.from, command.to);
/// assert_eq!(rollback.to, command.from);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    /// The card or column the command moves.
    pub subject_id: Uuid,
    /// The placement the subject had before the move.
    pub from: Placement,
    /// The placement the command moves the subject to.
    pub to: Placement,
}

impl MoveCommand {
    /// Builds the command corresponding to an emitted move event.
    #[must_use]
    pub const fn from_event(event: &MoveEvent) -> Self {
        Self {
            subject_id: event.subject_id,
            from: event.from,
            to: event.to,
        }
    }

    /// Returns the command that undoes this one.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            subject_id: self.subject_id,
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the subject kind this command applies to.
    #[must_use]
    pub const fn kind(&self) -> SubjectKind {
        self.to.kind()
    }
}
