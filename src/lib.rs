//! driftboard - a headless Kanban board state engine.
//!
//! This crate is a facade over the workspace members. It re-exports the
//! board data model, the drag-and-drop engine, and the configuration
//! layer so hosts can depend on a single crate.
//!
//! # Overview
//!
//! - [`model`]: cards, columns, swimlanes, and the board snapshot
//! - [`engine`]: move resolution, drag state machine, events, controller
//! - [`config`]: recognized board options and their persistence
//!
//! Rendering and backend persistence are host concerns: the engine turns
//! gesture calls into validated moves and events, nothing more.
//!
//! # Example
//!
//! ```
//! use driftboard::engine::BoardController;
//! use driftboard::model::{BoardSnapshot, Card, Column, GroupKey};
//!
//! let mut snapshot = BoardSnapshot::new();
//! let todo = Column::new("To Do");
//! let doing = Column::new("Doing");
//! let target = GroupKey::new(doing.id);
//! snapshot.add_column(todo.clone());
//! snapshot.add_column(doing);
//! let card = Card::new("Write the docs", todo.id);
//! let card_id = card.id;
//! snapshot.add_card(card);
//!
//! let mut controller = BoardController::new(snapshot);
//! controller.begin_card_drag(card_id);
//! controller.hover_card_target(target, 0);
//! let events = controller.commit_drop();
//! assert!(!events.is_empty());
//! ```

pub use driftboard_config as config;
pub use driftboard_engine as engine;
pub use driftboard_model as model;
