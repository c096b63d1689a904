//! Board controller.
//!
//! This module provides the [`BoardController`], the single entry point
//! hosts drive with gesture calls. It owns the authoritative snapshot,
//! the board options, and the drag state machine, and it packages every
//! state change into ordered [`BoardEvent`] values.
//!
//! All validation that needs board state or options happens here:
//! gesture gates, locked subjects, columns that refuse cards, and
//! same-group reordering. Anomalies (stale references, rejected
//! gestures) degrade to no-ops and are trace-logged; the gesture API
//! never returns an error.

use tracing::{debug, trace, warn};

use driftboard_config::BoardOptions;
use driftboard_model::{BoardSnapshot, CardId, ColumnId, GroupKey, Grouping, ModelError};

use crate::command::MoveCommand;
use crate::drag::{DragGesture, DragState};
use crate::events::{BoardEvent, MoveEvent, Placement, SubjectKind};
use crate::resolver::{resolve_card_move, resolve_column_move};

/// The controller's reaction to a hover call.
///
/// Hosts use this to drive drop-target feedback (for instance a
/// forbidden cursor over a column that refuses cards). It carries no
/// state; the machine keeps only the most recent accepted candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverFeedback {
    /// The target was recorded as the current drop candidate.
    Accepted,
    /// The target refuses the subject; any previous candidate was
    /// discarded and dropping now will cancel.
    Rejected,
    /// No gesture is active, or the target kind does not match the
    /// dragged subject.
    Ignored,
}

/// Drives one board: snapshot, options, and drag gesture state.
///
/// Hosts construct one controller per board, translate pointer events
/// into `begin_*` / `hover_*` / [`commit_drop`](Self::commit_drop) /
/// [`cancel`](Self::cancel) calls, and consume the returned events to
/// re-render and persist.
///
/// # Examples
///
/// ```
/// use driftboard_engine::BoardController;
/// use driftboard_model::{BoardSnapshot, Card, Column, GroupKey};
///
/// let mut snapshot = BoardSnapshot::new();
/// let todo = Column::new("To Do");
/// let done = Column::new("Done");
/// let done_group = GroupKey::new(done.id);
/// let todo_id = todo.id;
/// snapshot.add_column(todo);
/// snapshot.add_column(done);
/// let card = Card::new("Ship it", todo_id);
/// let card_id = card.id;
/// snapshot.add_card(card);
///
/// let mut controller = BoardController::new(snapshot);
/// controller.begin_card_drag(card_id);
/// controller.hover_card_target(done_group, 0);
/// let events = controller.commit_drop();
/// assert!(events.iter().any(|e| e.is_move()));
/// ```
#[derive(Debug, Clone)]
pub struct BoardController {
    snapshot: BoardSnapshot,
    options: BoardOptions,
    drag: DragState,
}

impl BoardController {
    /// Creates a controller with default options (everything enabled).
    #[must_use]
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self::with_options(snapshot, BoardOptions::default())
    }

    /// Creates a controller with the given options.
    ///
    /// Options are fixed for the controller's lifetime.
    #[must_use]
    pub fn with_options(snapshot: BoardSnapshot, options: BoardOptions) -> Self {
        Self {
            snapshot,
            options,
            drag: DragState::new(),
        }
    }

    /// Returns the current authoritative snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Returns the controller's options.
    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// Returns the current drag machine state.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns `true` iff the column has a WIP limit and exceeds it.
    ///
    /// Advisory only; surfaced for host feedback, never blocks a move.
    #[must_use]
    pub fn is_over_limit(&self, column_id: ColumnId) -> bool {
        self.snapshot.is_over_limit(column_id)
    }

    /// Replaces the authoritative snapshot wholesale.
    ///
    /// This is the host's path for entity lifecycle changes (adding and
    /// removing cards or columns). If a gesture is active and its
    /// subject no longer exists in the new snapshot, the gesture is
    /// cancelled and the returned events carry the resulting drag-end.
    pub fn replace_snapshot(&mut self, snapshot: BoardSnapshot) -> Vec<BoardEvent> {
        self.snapshot = snapshot;

        if let Some(gesture) = self.drag.gesture().copied() {
            let missing = match gesture.kind {
                SubjectKind::Card => self.snapshot.find_card(gesture.subject_id).is_none(),
                SubjectKind::Column => self.snapshot.find_column(gesture.subject_id).is_none(),
            };
            if missing {
                debug!(subject = %gesture.subject_id, "drag cancelled: subject removed from board");
                return self.cancel();
            }
        }
        Vec::new()
    }

    /// Begins a card drag gesture.
    ///
    /// Emits a drag-start event on success. The gesture is silently
    /// rejected (empty event list, state unchanged) when drag-and-drop
    /// is disabled, another gesture is active, the card is unknown, or
    /// the card is locked.
    pub fn begin_card_drag(&mut self, id: CardId) -> Vec<BoardEvent> {
        if !self.options.enable_drag_drop {
            debug!(card = %id, "card drag rejected: drag-and-drop disabled");
            return Vec::new();
        }
        if self.drag.is_active() {
            debug!(card = %id, "card drag rejected: another gesture is active");
            return Vec::new();
        }
        let Some(card) = self.snapshot.find_card(id) else {
            debug!(card = %id, "card drag rejected: unknown card");
            return Vec::new();
        };
        if card.locked {
            debug!(card = %id, "card drag rejected: card is locked");
            return Vec::new();
        }

        let origin = Placement::Card {
            group: self.grouping().group_of(card),
            index: card.order,
        };
        self.drag.begin(DragGesture {
            subject_id: id,
            kind: SubjectKind::Card,
            origin,
        });
        vec![BoardEvent::DragStart {
            subject_id: id,
            kind: SubjectKind::Card,
        }]
    }

    /// Begins a column drag gesture.
    ///
    /// Same rejection rules as [`begin_card_drag`](Self::begin_card_drag),
    /// gated by `enable_column_drag`.
    pub fn begin_column_drag(&mut self, id: ColumnId) -> Vec<BoardEvent> {
        if !self.options.enable_column_drag {
            debug!(column = %id, "column drag rejected: column drag disabled");
            return Vec::new();
        }
        if self.drag.is_active() {
            debug!(column = %id, "column drag rejected: another gesture is active");
            return Vec::new();
        }
        let Some(column) = self.snapshot.find_column(id) else {
            debug!(column = %id, "column drag rejected: unknown column");
            return Vec::new();
        };
        if column.locked {
            debug!(column = %id, "column drag rejected: column is locked");
            return Vec::new();
        }

        let origin = Placement::Column {
            index: column.order,
        };
        self.drag.begin(DragGesture {
            subject_id: id,
            kind: SubjectKind::Column,
            origin,
        });
        vec![BoardEvent::DragStart {
            subject_id: id,
            kind: SubjectKind::Column,
        }]
    }

    /// Records the group and index the pointer currently hovers.
    ///
    /// Called repeatedly as the pointer moves; only the most recent
    /// accepted candidate is kept. A column that refuses cards (or a
    /// same-group position while reordering is disabled) rejects the
    /// hover: the candidate is discarded, the gesture stays active, and
    /// the host can surface invalid-drop feedback.
    pub fn hover_card_target(&mut self, group: GroupKey, index: usize) -> HoverFeedback {
        let Some(gesture) = self.drag.gesture().copied() else {
            return HoverFeedback::Ignored;
        };
        if gesture.kind != SubjectKind::Card {
            return HoverFeedback::Ignored;
        }

        let grouping = self.grouping();
        let group = grouping.normalize(group);
        let Some(column) = self.snapshot.find_column(group.column_id) else {
            trace!(column = %group.column_id, "hover rejected: unknown column");
            self.drag.clear_candidate();
            return HoverFeedback::Rejected;
        };
        if !column.accepts_cards {
            trace!(column = %column.id, "hover rejected: column refuses cards");
            self.drag.clear_candidate();
            return HoverFeedback::Rejected;
        }
        if !self.options.enable_card_reordering
            && let Some(card) = self.snapshot.find_card(gesture.subject_id)
            && grouping.group_of(card) == group
        {
            trace!(card = %gesture.subject_id, "hover rejected: same-group reordering disabled");
            self.drag.clear_candidate();
            return HoverFeedback::Rejected;
        }

        self.drag.set_candidate(Placement::Card { group, index });
        HoverFeedback::Accepted
    }

    /// Records the column index the pointer currently hovers.
    ///
    /// The index is clamped at commit time; any index is a valid
    /// candidate for an active column gesture.
    pub fn hover_column_target(&mut self, index: usize) -> HoverFeedback {
        let Some(gesture) = self.drag.gesture() else {
            return HoverFeedback::Ignored;
        };
        if gesture.kind != SubjectKind::Column {
            return HoverFeedback::Ignored;
        }

        self.drag.set_candidate(Placement::Column { index });
        HoverFeedback::Accepted
    }

    /// Drops the dragged subject on the current candidate.
    ///
    /// With a valid candidate the gesture commits: the resolver runs
    /// against the current snapshot, and if its output differs from the
    /// input the snapshot is replaced and move + board-change events are
    /// emitted. The drag-end event's `success` flag reflects that a
    /// commit occurred, not that it changed anything.
    ///
    /// A drop without a valid candidate (outside any target, or on a
    /// rejecting target) is a cancellation.
    pub fn commit_drop(&mut self) -> Vec<BoardEvent> {
        let Some((gesture, candidate)) = self.drag.finish() else {
            return Vec::new();
        };
        let Some(candidate) = candidate else {
            debug!(subject = %gesture.subject_id, "drop without a valid target; gesture cancelled");
            return vec![BoardEvent::DragEnd {
                subject_id: gesture.subject_id,
                kind: gesture.kind,
                success: false,
            }];
        };

        let mut events = Vec::new();
        match candidate {
            Placement::Card { group, index: _ }
                if self.snapshot.find_column(group.column_id).is_none() =>
            {
                // The target column vanished between hover and drop.
                warn!(
                    card = %gesture.subject_id,
                    column = %group.column_id,
                    "card drop had no effect (target column no longer exists)"
                );
            }
            Placement::Card { group, index } => {
                match resolve_card_move(
                    &self.snapshot.cards,
                    gesture.subject_id,
                    &group,
                    index,
                    self.grouping(),
                ) {
                    Some(outcome) => {
                        self.snapshot.cards = outcome.cards;
                        events.push(BoardEvent::Move(MoveEvent {
                            subject_id: gesture.subject_id,
                            from: outcome.from,
                            to: outcome.to,
                        }));
                        events.push(BoardEvent::BoardChange {
                            snapshot: self.snapshot.clone(),
                        });
                    }
                    None => {
                        warn!(
                            card = %gesture.subject_id,
                            "card drop had no effect (stale reference or unchanged position)"
                        );
                    }
                }
            }
            Placement::Column { index } => {
                match resolve_column_move(&self.snapshot.columns, gesture.subject_id, index) {
                    Some(outcome) => {
                        self.snapshot.columns = outcome.columns;
                        events.push(BoardEvent::Move(MoveEvent {
                            subject_id: gesture.subject_id,
                            from: outcome.from,
                            to: outcome.to,
                        }));
                        events.push(BoardEvent::BoardChange {
                            snapshot: self.snapshot.clone(),
                        });
                    }
                    None => {
                        warn!(
                            column = %gesture.subject_id,
                            "column drop had no effect (stale reference or unchanged position)"
                        );
                    }
                }
            }
        }

        events.push(BoardEvent::DragEnd {
            subject_id: gesture.subject_id,
            kind: gesture.kind,
            success: true,
        });
        events
    }

    /// Cancels the active gesture, if any.
    ///
    /// Invoked on escape, on drop outside every target, or when the
    /// drag source disappears mid-gesture. The store is never touched.
    pub fn cancel(&mut self) -> Vec<BoardEvent> {
        match self.drag.finish() {
            Some((gesture, _)) => vec![BoardEvent::DragEnd {
                subject_id: gesture.subject_id,
                kind: gesture.kind,
                success: false,
            }],
            None => Vec::new(),
        }
    }

    /// Applies a move command outside a gesture.
    ///
    /// This is the optimistic-update integration point: hosts replay a
    /// command's [`inverse`](MoveCommand::inverse) to roll a move back
    /// when external persistence fails. Commands bypass gesture gates.
    ///
    /// Returns the emitted events; an empty list means the command was
    /// a no-op (the subject already sits at the target placement).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CardNotFound`] or
    /// [`ModelError::ColumnNotFound`] when the command's subject does
    /// not exist on the board.
    pub fn apply_command(&mut self, command: &MoveCommand) -> driftboard_model::Result<Vec<BoardEvent>> {
        match command.to {
            Placement::Card { group, index } => {
                if self.snapshot.find_card(command.subject_id).is_none() {
                    return Err(ModelError::CardNotFound(command.subject_id));
                }
                match resolve_card_move(
                    &self.snapshot.cards,
                    command.subject_id,
                    &group,
                    index,
                    self.grouping(),
                ) {
                    Some(outcome) => {
                        self.snapshot.cards = outcome.cards;
                        Ok(vec![
                            BoardEvent::Move(MoveEvent {
                                subject_id: command.subject_id,
                                from: outcome.from,
                                to: outcome.to,
                            }),
                            BoardEvent::BoardChange {
                                snapshot: self.snapshot.clone(),
                            },
                        ])
                    }
                    None => Ok(Vec::new()),
                }
            }
            Placement::Column { index } => {
                if self.snapshot.find_column(command.subject_id).is_none() {
                    return Err(ModelError::ColumnNotFound(command.subject_id));
                }
                match resolve_column_move(&self.snapshot.columns, command.subject_id, index) {
                    Some(outcome) => {
                        self.snapshot.columns = outcome.columns;
                        Ok(vec![
                            BoardEvent::Move(MoveEvent {
                                subject_id: command.subject_id,
                                from: outcome.from,
                                to: outcome.to,
                            }),
                            BoardEvent::BoardChange {
                                snapshot: self.snapshot.clone(),
                            },
                        ])
                    }
                    None => Ok(Vec::new()),
                }
            }
        }
    }

    /// Returns the grouping mode implied by the options.
    fn grouping(&self) -> Grouping {
        if self.options.enable_swimlanes {
            Grouping::BySwimlane
        } else {
            Grouping::ByColumnOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftboard_model::{Card, Column, SwimlaneId};

    /// Columns A, B; cards c1(A,0), c2(A,1), c3(B,0).
    struct Fixture {
        controller: BoardController,
        a: ColumnId,
        b: ColumnId,
        c1: CardId,
        c2: CardId,
        c3: CardId,
    }

    fn fixture() -> Fixture {
        fixture_with_options(BoardOptions::default())
    }

    fn fixture_with_options(options: BoardOptions) -> Fixture {
        let mut snapshot = BoardSnapshot::new();
        let col_a = Column::new("A");
        let col_b = Column::new("B");
        let (a, b) = (col_a.id, col_b.id);
        snapshot.add_column(col_a);
        snapshot.add_column(col_b);

        let card1 = Card::new("c1", a);
        let card2 = Card::new("c2", a);
        let card3 = Card::new("c3", b);
        let (c1, c2, c3) = (card1.id, card2.id, card3.id);
        snapshot.add_card(card1);
        snapshot.add_card(card2);
        snapshot.add_card(card3);

        Fixture {
            controller: BoardController::with_options(snapshot, options),
            a,
            b,
            c1,
            c2,
            c3,
        }
    }

    fn group_ids(controller: &BoardController, group: GroupKey) -> Vec<CardId> {
        controller
            .snapshot()
            .cards_in_group(&group)
            .iter()
            .map(|c| c.id)
            .collect()
    }

    #[test]
    fn begin_card_drag_emits_drag_start() {
        let mut f = fixture();

        let events = f.controller.begin_card_drag(f.c1);

        assert_eq!(
            events,
            vec![BoardEvent::DragStart {
                subject_id: f.c1,
                kind: SubjectKind::Card,
            }]
        );
        assert!(f.controller.drag_state().is_active());
    }

    #[test]
    fn begin_card_drag_rejected_when_disabled() {
        let mut f = fixture_with_options(BoardOptions {
            enable_drag_drop: false,
            ..BoardOptions::default()
        });

        let events = f.controller.begin_card_drag(f.c1);

        assert!(events.is_empty());
        assert!(!f.controller.drag_state().is_active());
    }

    #[test]
    fn begin_card_drag_rejected_for_locked_card() {
        let mut snapshot = BoardSnapshot::new();
        let column = Column::new("A");
        let column_id = column.id;
        snapshot.add_column(column);
        let mut card = Card::new("locked", column_id);
        card.locked = true;
        let card_id = card.id;
        snapshot.add_card(card);

        let mut controller = BoardController::new(snapshot);
        assert!(controller.begin_card_drag(card_id).is_empty());
    }

    #[test]
    fn begin_card_drag_rejected_for_unknown_card() {
        let mut f = fixture();
        assert!(f.controller.begin_card_drag(CardId::new_v4()).is_empty());
    }

    #[test]
    fn second_begin_rejected_while_gesture_active() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);

        let events = f.controller.begin_card_drag(f.c2);

        assert!(events.is_empty());
        assert_eq!(
            f.controller.drag_state().gesture().unwrap().subject_id,
            f.c1
        );
    }

    #[test]
    fn drop_commits_cross_group_move() {
        // Moving c1 to group B at index 0 must yield c1(B,0), c3(B,1),
        // c2(A,0).
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);
        let feedback = f.controller.hover_card_target(GroupKey::new(f.b), 0);
        assert_eq!(feedback, HoverFeedback::Accepted);

        let events = f.controller.commit_drop();

        assert_eq!(group_ids(&f.controller, GroupKey::new(f.b)), vec![f.c1, f.c3]);
        assert_eq!(group_ids(&f.controller, GroupKey::new(f.a)), vec![f.c2]);
        f.controller.snapshot().check_density().expect("dense after move");

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            BoardEvent::Move(MoveEvent {
                subject_id: f.c1,
                from: Placement::Card {
                    group: GroupKey::new(f.a),
                    index: 0,
                },
                to: Placement::Card {
                    group: GroupKey::new(f.b),
                    index: 0,
                },
            })
        );
        assert!(events[1].is_board_change());
        assert_eq!(
            events[2],
            BoardEvent::DragEnd {
                subject_id: f.c1,
                kind: SubjectKind::Card,
                success: true,
            }
        );
    }

    #[test]
    fn board_change_carries_the_updated_snapshot() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(GroupKey::new(f.b), 0);

        let events = f.controller.commit_drop();

        let BoardEvent::BoardChange { snapshot } = &events[1] else {
            panic!("expected board-change event");
        };
        assert_eq!(snapshot, f.controller.snapshot());
    }

    #[test]
    fn hover_keeps_only_most_recent_candidate() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(GroupKey::new(f.b), 1);
        f.controller.hover_card_target(GroupKey::new(f.b), 0);

        f.controller.commit_drop();

        assert_eq!(group_ids(&f.controller, GroupKey::new(f.b)), vec![f.c1, f.c3]);
    }

    #[test]
    fn drop_on_refusing_column_changes_nothing() {
        let mut snapshot = BoardSnapshot::new();
        let source = Column::new("Source");
        let mut wall = Column::new("Wall");
        wall.accepts_cards = false;
        let (source_id, wall_id) = (source.id, wall.id);
        snapshot.add_column(source);
        snapshot.add_column(wall);
        let card = Card::new("card", source_id);
        let card_id = card.id;
        snapshot.add_card(card);

        let mut controller = BoardController::new(snapshot);
        let before = controller.snapshot().clone();

        controller.begin_card_drag(card_id);
        let feedback = controller.hover_card_target(GroupKey::new(wall_id), 0);
        assert_eq!(feedback, HoverFeedback::Rejected);

        let events = controller.commit_drop();

        assert_eq!(controller.snapshot(), &before);
        assert_eq!(
            events,
            vec![BoardEvent::DragEnd {
                subject_id: card_id,
                kind: SubjectKind::Card,
                success: false,
            }]
        );
    }

    #[test]
    fn rejecting_hover_discards_previous_candidate() {
        let mut snapshot = BoardSnapshot::new();
        let source = Column::new("Source");
        let open = Column::new("Open");
        let mut wall = Column::new("Wall");
        wall.accepts_cards = false;
        let (source_id, open_id, wall_id) = (source.id, open.id, wall.id);
        snapshot.add_column(source);
        snapshot.add_column(open);
        snapshot.add_column(wall);
        let card = Card::new("card", source_id);
        let card_id = card.id;
        snapshot.add_card(card);

        let mut controller = BoardController::new(snapshot);
        controller.begin_card_drag(card_id);
        assert_eq!(
            controller.hover_card_target(GroupKey::new(open_id), 0),
            HoverFeedback::Accepted
        );
        assert_eq!(
            controller.hover_card_target(GroupKey::new(wall_id), 0),
            HoverFeedback::Rejected
        );

        // The stale "Open" candidate must not survive the rejection.
        assert!(controller.drag_state().candidate().is_none());
        let events = controller.commit_drop();
        assert_eq!(
            events,
            vec![BoardEvent::DragEnd {
                subject_id: card_id,
                kind: SubjectKind::Card,
                success: false,
            }]
        );
    }

    #[test]
    fn hover_unknown_column_is_rejected() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);

        assert_eq!(
            f.controller
                .hover_card_target(GroupKey::new(ColumnId::new_v4()), 0),
            HoverFeedback::Rejected
        );
    }

    #[test]
    fn hover_without_gesture_is_ignored() {
        let mut f = fixture();
        assert_eq!(
            f.controller.hover_card_target(GroupKey::new(f.b), 0),
            HoverFeedback::Ignored
        );
    }

    #[test]
    fn noop_commit_succeeds_without_move_events() {
        // Dropping c1 back on its own position completes the gesture
        // but emits no move or board-change.
        let mut f = fixture();
        let before = f.controller.snapshot().clone();
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(GroupKey::new(f.a), 0);

        let events = f.controller.commit_drop();

        assert_eq!(f.controller.snapshot(), &before);
        assert_eq!(
            events,
            vec![BoardEvent::DragEnd {
                subject_id: f.c1,
                kind: SubjectKind::Card,
                success: true,
            }]
        );
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let mut f = fixture();
        let before = f.controller.snapshot().clone();
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(GroupKey::new(f.b), 0);

        let events = f.controller.cancel();

        assert_eq!(f.controller.snapshot(), &before);
        assert_eq!(
            events,
            vec![BoardEvent::DragEnd {
                subject_id: f.c1,
                kind: SubjectKind::Card,
                success: false,
            }]
        );
        assert!(!f.controller.drag_state().is_active());
    }

    #[test]
    fn cancel_without_gesture_emits_nothing() {
        let mut f = fixture();
        assert!(f.controller.cancel().is_empty());
    }

    #[test]
    fn drop_without_gesture_emits_nothing() {
        let mut f = fixture();
        assert!(f.controller.commit_drop().is_empty());
    }

    #[test]
    fn same_group_reordering_gate() {
        let mut f = fixture_with_options(BoardOptions {
            enable_card_reordering: false,
            ..BoardOptions::default()
        });
        f.controller.begin_card_drag(f.c1);

        // Same-group hover is rejected...
        assert_eq!(
            f.controller.hover_card_target(GroupKey::new(f.a), 1),
            HoverFeedback::Rejected
        );
        // ...while a cross-group hover is still accepted.
        assert_eq!(
            f.controller.hover_card_target(GroupKey::new(f.b), 0),
            HoverFeedback::Accepted
        );
    }

    #[test]
    fn column_drag_flow() {
        let mut f = fixture();
        let events = f.controller.begin_column_drag(f.a);
        assert_eq!(
            events,
            vec![BoardEvent::DragStart {
                subject_id: f.a,
                kind: SubjectKind::Column,
            }]
        );

        assert_eq!(
            f.controller.hover_column_target(1),
            HoverFeedback::Accepted
        );
        let events = f.controller.commit_drop();

        let titles: Vec<&str> = f
            .controller
            .snapshot()
            .columns_ordered()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert!(events[0].is_move());
        assert!(events[1].is_board_change());
    }

    #[test]
    fn column_drag_rejected_when_disabled() {
        let mut f = fixture_with_options(BoardOptions {
            enable_column_drag: false,
            ..BoardOptions::default()
        });

        assert!(f.controller.begin_column_drag(f.a).is_empty());
    }

    #[test]
    fn column_drag_rejected_for_locked_column() {
        let mut snapshot = BoardSnapshot::new();
        let mut column = Column::new("Pinned");
        column.locked = true;
        let column_id = column.id;
        snapshot.add_column(column);
        snapshot.add_column(Column::new("Free"));

        let mut controller = BoardController::new(snapshot);
        assert!(controller.begin_column_drag(column_id).is_empty());
    }

    #[test]
    fn hover_kind_mismatch_is_ignored() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);
        assert_eq!(f.controller.hover_column_target(1), HoverFeedback::Ignored);

        f.controller.cancel();
        f.controller.begin_column_drag(f.a);
        assert_eq!(
            f.controller.hover_card_target(GroupKey::new(f.b), 0),
            HoverFeedback::Ignored
        );
    }

    #[test]
    fn swimlane_targets_normalized_when_swimlanes_disabled() {
        let mut f = fixture_with_options(BoardOptions {
            enable_swimlanes: false,
            ..BoardOptions::default()
        });
        f.controller.begin_card_drag(f.c1);

        // A laned target collapses onto the bare column group.
        let laned = GroupKey::in_swimlane(f.b, SwimlaneId::new_v4());
        assert_eq!(
            f.controller.hover_card_target(laned, 0),
            HoverFeedback::Accepted
        );
        f.controller.commit_drop();

        let moved = f.controller.snapshot().find_card(f.c1).unwrap();
        assert_eq!(moved.column_id, f.b);
        assert!(moved.swimlane_id.is_none());
    }

    #[test]
    fn replace_snapshot_cancels_gesture_when_subject_vanishes() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(GroupKey::new(f.b), 0);

        let mut without_c1 = f.controller.snapshot().clone();
        without_c1.remove_card(f.c1);
        let events = f.controller.replace_snapshot(without_c1);

        assert_eq!(
            events,
            vec![BoardEvent::DragEnd {
                subject_id: f.c1,
                kind: SubjectKind::Card,
                success: false,
            }]
        );
        assert!(!f.controller.drag_state().is_active());
    }

    #[test]
    fn replace_snapshot_keeps_gesture_when_subject_survives() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);

        let mut grown = f.controller.snapshot().clone();
        grown.add_card(Card::new("c4", f.a));
        let events = f.controller.replace_snapshot(grown);

        assert!(events.is_empty());
        assert!(f.controller.drag_state().is_active());
    }

    #[test]
    fn drop_on_removed_target_column_is_a_noop_commit() {
        let mut f = fixture();
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(GroupKey::new(f.b), 0);

        // The host removes the target column mid-gesture; the subject
        // survives, so the gesture stays open.
        let mut without_b = f.controller.snapshot().clone();
        without_b.remove_column(f.b);
        assert!(f.controller.replace_snapshot(without_b).is_empty());
        let before = f.controller.snapshot().clone();

        let events = f.controller.commit_drop();

        assert_eq!(f.controller.snapshot(), &before);
        assert_eq!(
            events,
            vec![BoardEvent::DragEnd {
                subject_id: f.c1,
                kind: SubjectKind::Card,
                success: true,
            }]
        );
    }

    #[test]
    fn apply_command_and_inverse_round_trip() {
        let mut f = fixture();
        let group_a = GroupKey::new(f.a);
        let group_b = GroupKey::new(f.b);
        let before_a = group_ids(&f.controller, group_a);
        let before_b = group_ids(&f.controller, group_b);

        // Move c1 to B, capture the command from the emitted event.
        f.controller.begin_card_drag(f.c1);
        f.controller.hover_card_target(group_b, 0);
        let events = f.controller.commit_drop();
        let BoardEvent::Move(move_event) = &events[0] else {
            panic!("expected move event");
        };
        let command = MoveCommand::from_event(move_event);

        // Simulate persistence failure: roll the move back.
        let rollback_events = f
            .controller
            .apply_command(&command.inverse())
            .expect("subject exists");

        assert_eq!(group_ids(&f.controller, group_a), before_a);
        assert_eq!(group_ids(&f.controller, group_b), before_b);
        assert!(rollback_events[0].is_move());
        assert!(rollback_events[1].is_board_change());
    }

    #[test]
    fn apply_command_unknown_subject_is_an_error() {
        let mut f = fixture();
        let command = MoveCommand {
            subject_id: CardId::new_v4(),
            from: Placement::Card {
                group: GroupKey::new(f.a),
                index: 0,
            },
            to: Placement::Card {
                group: GroupKey::new(f.b),
                index: 0,
            },
        };

        let result = f.controller.apply_command(&command);
        assert!(matches!(result, Err(ModelError::CardNotFound(_))));
    }

    #[test]
    fn apply_command_noop_emits_nothing() {
        let mut f = fixture();
        let command = MoveCommand {
            subject_id: f.c1,
            from: Placement::Card {
                group: GroupKey::new(f.b),
                index: 0,
            },
            to: Placement::Card {
                group: GroupKey::new(f.a),
                index: 0,
            },
        };

        let events = f.controller.apply_command(&command).expect("subject exists");
        assert!(events.is_empty());
    }

    #[test]
    fn over_limit_is_advisory_and_never_blocks() {
        let mut snapshot = BoardSnapshot::new();
        let source = Column::new("Source");
        let mut busy = Column::new("Busy");
        busy.wip_limit = Some(1);
        let (source_id, busy_id) = (source.id, busy.id);
        snapshot.add_column(source);
        snapshot.add_column(busy);
        let card = Card::new("incoming", source_id);
        let card_id = card.id;
        snapshot.add_card(card);
        snapshot.add_card(Card::new("resident", busy_id));

        let mut controller = BoardController::new(snapshot);
        controller.begin_card_drag(card_id);
        controller.hover_card_target(GroupKey::new(busy_id), 0);
        let events = controller.commit_drop();

        // The move lands despite exceeding the limit; the flag is up.
        assert!(events.iter().any(BoardEvent::is_move));
        assert!(controller.is_over_limit(busy_id));
    }
}
