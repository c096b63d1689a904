//! Drag gesture state machine.
//!
//! This module defines the explicit state machine that turns a temporal
//! sequence of gesture calls into at most one validated move request.
//! The machine itself is pure sequencing: it enforces that only one
//! gesture is active at a time, that candidates match the subject kind,
//! and that every gesture ends in exactly one terminal transition.
//! Validation that needs board state or options (drop gates, locked
//! subjects) lives in the controller.
//!
//! Each machine value is owned by one controller instance; there is no
//! process-wide drag state, so multiple boards can run independent
//! gestures in the same process.

use uuid::Uuid;

use crate::events::{Placement, SubjectKind};

/// An in-flight drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    /// The card or column being dragged.
    pub subject_id: Uuid,
    /// Whether the subject is a card or a column.
    pub kind: SubjectKind,
    /// Where the subject was when the gesture began.
    pub origin: Placement,
}

/// The drag-interaction state machine.
///
/// States progress `Idle → Dragging → Targeting`, with `Targeting`
/// re-entered on every hover; both terminal transitions (commit and
/// cancel) return to `Idle` via [`DragState::finish`].
///
/// # Examples
///
/// ```
/// use driftboard_engine::{DragGesture, DragState, Placement, SubjectKind};
/// use uuid::Uuid;
///
/// let mut drag = DragState::new();
/// assert!(!drag.is_active());
///
/// let began = drag.begin(DragGesture {
///     subject_id: Uuid::new_v4(),
///     kind: SubjectKind::Column,
///     origin: Placement::Column { index: 0 },
/// });
/// assert!(began);
/// drag.set_candidate(Placement::Column { index: 2 });
///
/// let (gesture, candidate) = drag.finish().expect("gesture was active");
/// assert_eq!(gesture.kind, SubjectKind::Column);
/// assert_eq!(candidate, Some(Placement::Column { index: 2 }));
/// assert!(!drag.is_active());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress with no valid drop candidate.
    Dragging(DragGesture),
    /// A gesture is in progress with a current drop candidate.
    Targeting(DragGesture, Placement),
}

impl DragState {
    /// Creates a machine in the `Idle` state.
    ///
    /// This is equivalent to `DragState::default()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::Idle
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns the active gesture, if any.
    #[must_use]
    pub const fn gesture(&self) -> Option<&DragGesture> {
        match self {
            Self::Idle => None,
            Self::Dragging(gesture) | Self::Targeting(gesture, _) => Some(gesture),
        }
    }

    /// Returns the current drop candidate, if any.
    #[must_use]
    pub const fn candidate(&self) -> Option<&Placement> {
        match self {
            Self::Targeting(_, candidate) => Some(candidate),
            Self::Idle | Self::Dragging(_) => None,
        }
    }

    /// Begins a gesture.
    ///
    /// Returns `false`, leaving the state untouched, if a gesture is
    /// already active; only one subject may be dragged at a time.
    pub fn begin(&mut self, gesture: DragGesture) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self::Dragging(gesture);
        true
    }

    /// Records a drop candidate for the active gesture.
    ///
    /// Only the most recent candidate is kept. Returns `false` if no
    /// gesture is active or the candidate's kind does not match the
    /// dragged subject.
    pub fn set_candidate(&mut self, candidate: Placement) -> bool {
        let Some(gesture) = self.gesture().copied() else {
            return false;
        };
        if candidate.kind() != gesture.kind {
            return false;
        }
        *self = Self::Targeting(gesture, candidate);
        true
    }

    /// Discards the current candidate, returning to `Dragging`.
    ///
    /// Used when the pointer hovers a target that refuses the subject.
    /// No-op when idle or already candidate-free.
    pub fn clear_candidate(&mut self) {
        if let Self::Targeting(gesture, _) = self {
            *self = Self::Dragging(*gesture);
        }
    }

    /// Ends the gesture, returning the machine to `Idle`.
    ///
    /// Returns the gesture and its final candidate (if one was set) so
    /// the caller can commit or cancel; `None` when no gesture was
    /// active.
    pub fn finish(&mut self) -> Option<(DragGesture, Option<Placement>)> {
        let result = match *self {
            Self::Idle => None,
            Self::Dragging(gesture) => Some((gesture, None)),
            Self::Targeting(gesture, candidate) => Some((gesture, Some(candidate))),
        };
        *self = Self::Idle;
        result
    }
}
