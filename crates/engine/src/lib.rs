//! Board engine for driftboard.
//!
//! This crate turns pointer-driven drag gestures into validated,
//! idempotent move operations over a board snapshot.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`resolver`]: pure move-resolution functions
//! - [`drag`]: the drag gesture state machine
//! - [`events`]: change notification payloads
//! - [`controller`]: the per-board controller hosts drive
//! - [`command`]: replayable move commands for optimistic persistence
//!
//! # Control flow
//!
//! A host translates pointer events into controller calls: pointer-down
//! becomes [`BoardController::begin_card_drag`] (or
//! [`begin_column_drag`](BoardController::begin_column_drag)), pointer
//! movement over drop targets becomes repeated
//! [`hover_card_target`](BoardController::hover_card_target) /
//! [`hover_column_target`](BoardController::hover_column_target) calls,
//! and pointer-up becomes [`commit_drop`](BoardController::commit_drop)
//! or [`cancel`](BoardController::cancel). Every call runs synchronously
//! and returns the events it emitted, in order.
//!
//! # Example
//!
//! ```
//! use driftboard_engine::{BoardController, BoardEvent};
//! use driftboard_model::{BoardSnapshot, Card, Column, GroupKey};
//!
//! let mut snapshot = BoardSnapshot::new();
//! let todo = Column::new("To Do");
//! let done = Column::new("Done");
//! let done_group = GroupKey::new(done.id);
//! let todo_id = todo.id;
//! snapshot.add_column(todo);
//! snapshot.add_column(done);
//! let card = Card::new("Ship it", todo_id);
//! let card_id = card.id;
//! snapshot.add_card(card);
//!
//! let mut controller = BoardController::new(snapshot);
//! controller.begin_card_drag(card_id);
//! controller.hover_card_target(done_group, 0);
//! let events = controller.commit_drop();
//!
//! assert!(events.iter().any(BoardEvent::is_move));
//! ```

pub mod command;
pub mod controller;
pub mod drag;
pub mod events;
pub mod resolver;

// Re-export primary types at crate root for convenience
pub use command::MoveCommand;
pub use controller::{BoardController, HoverFeedback};
pub use drag::{DragGesture, DragState};
pub use events::{BoardEvent, MoveEvent, Placement, SubjectKind};
pub use resolver::{
    CardMoveOutcome, ColumnMoveOutcome, resolve_card_move, resolve_column_move,
};
