//! The authoritative board snapshot.
//!
//! This module defines [`BoardSnapshot`], the owner of the card, column
//! and swimlane collections for a board session. All listings exposed
//! here are pure projections recomputed from the collections on demand;
//! there are no hidden caches that could fall out of sync.
//!
//! Entity lifecycle (adding and removing cards or columns) belongs to the
//! host; the snapshot offers `add_*`/`remove_*` helpers that keep `order`
//! values dense while doing so. The move resolver replaces the affected
//! collection wholesale and never edits one in place.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};
use crate::error::{ModelError, Result};
use crate::group::GroupKey;
use crate::swimlane::{Swimlane, SwimlaneId};

/// The full state of a board: cards, columns, and swimlanes.
///
/// Snapshots are plain values. A successful move produces a new snapshot;
/// collaborators holding an old one never observe partial mutation.
///
/// # Examples
///
/// ```
/// use driftboard_model::{BoardSnapshot, Card, Column};
///
/// let mut snapshot = BoardSnapshot::new();
/// let todo = Column::new("To Do");
/// let todo_id = todo.id;
/// snapshot.add_column(todo);
/// snapshot.add_card(Card::new("First", todo_id));
/// snapshot.add_card(Card::new("Second", todo_id));
///
/// assert_eq!(snapshot.card_count(todo_id), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// All cards on the board, in no particular backing order.
    ///
    /// Display position is carried by each card's `order` within its
    /// group; the sequence of this vector has no meaning.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// All columns of the board.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Explicitly declared swimlanes. May be empty, in which case an
    /// implicit swimlane list is derived from the cards.
    #[serde(default)]
    pub swimlanes: Vec<Swimlane>,
}

impl BoardSnapshot {
    /// Creates an empty board snapshot.
    ///
    /// This is equivalent to `BoardSnapshot::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card to the end of its group.
    ///
    /// The card's `order` is overwritten with the current size of its
    /// group, keeping the group's order sequence dense.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{BoardSnapshot, Card, ColumnId};
    ///
    /// let column = ColumnId::new_v4();
    /// let mut snapshot = BoardSnapshot::new();
    /// snapshot.add_card(Card::new("First", column));
    /// let second = Card::new("Second", column);
    /// let second_id = second.id;
    /// snapshot.add_card(second);
    ///
    /// assert_eq!(snapshot.find_card(second_id).unwrap().order, 1);
    /// ```
    pub fn add_card(&mut self, mut card: Card) {
        card.order = self.cards_in_group(&card.group()).len();
        self.cards.push(card);
    }

    /// Removes a card by ID, renumbering its group to close the gap.
    ///
    /// Returns the removed card if found, `None` otherwise.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == id)?;
        let removed = self.cards.remove(pos);

        let group = removed.group();
        let mut peers: Vec<&mut Card> = self
            .cards
            .iter_mut()
            .filter(|c| group.contains(c))
            .collect();
        peers.sort_by_key(|c| c.order);
        for (order, card) in peers.into_iter().enumerate() {
            card.order = order;
        }

        Some(removed)
    }

    /// Appends a column after all existing columns.
    ///
    /// The column's `order` is overwritten with the current column count.
    pub fn add_column(&mut self, mut column: Column) {
        column.order = self.columns.len();
        self.columns.push(column);
    }

    /// Removes a column by ID, renumbering the remaining columns.
    ///
    /// Cards referencing the column are left untouched; reassigning or
    /// removing them is the host's decision.
    pub fn remove_column(&mut self, id: ColumnId) -> Option<Column> {
        let pos = self.columns.iter().position(|c| c.id == id)?;
        let removed = self.columns.remove(pos);

        let mut remaining: Vec<&mut Column> = self.columns.iter_mut().collect();
        remaining.sort_by_key(|c| c.order);
        for (order, column) in remaining.into_iter().enumerate() {
            column.order = order;
        }

        Some(removed)
    }

    /// Appends a swimlane after all existing swimlanes.
    ///
    /// The swimlane's `order` is overwritten with the current count.
    pub fn add_swimlane(&mut self, mut swimlane: Swimlane) {
        swimlane.order = self.swimlanes.len();
        self.swimlanes.push(swimlane);
    }

    /// Returns the cards of a group, sorted ascending by `order`.
    ///
    /// This is a pure projection: calling it twice without a move in
    /// between returns equal results.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{BoardSnapshot, Card, ColumnId, GroupKey};
    ///
    /// let column = ColumnId::new_v4();
    /// let mut snapshot = BoardSnapshot::new();
    /// snapshot.add_card(Card::new("First", column));
    /// snapshot.add_card(Card::new("Second", column));
    ///
    /// let cards = snapshot.cards_in_group(&GroupKey::new(column));
    /// assert_eq!(cards.len(), 2);
    /// assert_eq!(cards[0].title, "First");
    /// ```
    #[must_use]
    pub fn cards_in_group(&self, group: &GroupKey) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().filter(|c| group.contains(c)).collect();
        cards.sort_by_key(|c| c.order);
        cards
    }

    /// Returns the number of cards in a column, across all swimlanes.
    #[must_use]
    pub fn card_count(&self, column_id: ColumnId) -> usize {
        self.cards.iter().filter(|c| c.column_id == column_id).count()
    }

    /// Returns `true` iff the column has a WIP limit and its card count
    /// exceeds it.
    ///
    /// Advisory only: collaborators surface the flag, the engine never
    /// blocks a move because of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{BoardSnapshot, Card, Column};
    ///
    /// let mut column = Column::new("Doing");
    /// column.wip_limit = Some(1);
    /// let column_id = column.id;
    ///
    /// let mut snapshot = BoardSnapshot::new();
    /// snapshot.add_column(column);
    /// snapshot.add_card(Card::new("One", column_id));
    /// assert!(!snapshot.is_over_limit(column_id));
    ///
    /// snapshot.add_card(Card::new("Two", column_id));
    /// assert!(snapshot.is_over_limit(column_id));
    /// ```
    #[must_use]
    pub fn is_over_limit(&self, column_id: ColumnId) -> bool {
        match self.find_column(column_id).and_then(|c| c.wip_limit) {
            Some(limit) => self.card_count(column_id) > limit,
            None => false,
        }
    }

    /// Returns a reference to a card by ID, if found.
    #[must_use]
    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Returns a reference to a column by ID, if found.
    #[must_use]
    pub fn find_column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns a reference to a swimlane by ID, if found.
    ///
    /// Only explicitly declared swimlanes are searched; implicit lanes
    /// derived from cards have no `Swimlane` entity.
    #[must_use]
    pub fn find_swimlane(&self, id: SwimlaneId) -> Option<&Swimlane> {
        self.swimlanes.iter().find(|s| s.id == id)
    }

    /// Returns all columns sorted ascending by `order`.
    #[must_use]
    pub fn columns_ordered(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Returns all explicitly declared swimlanes sorted by `order`.
    #[must_use]
    pub fn swimlanes_ordered(&self) -> Vec<&Swimlane> {
        let mut lanes: Vec<&Swimlane> = self.swimlanes.iter().collect();
        lanes.sort_by_key(|s| s.order);
        lanes
    }

    /// Returns the distinct swimlane ids present on cards, in order of
    /// first appearance.
    ///
    /// This is the implicit swimlane list used when the board declares no
    /// swimlanes of its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{BoardSnapshot, Card, ColumnId, SwimlaneId};
    ///
    /// let column = ColumnId::new_v4();
    /// let lane = SwimlaneId::new_v4();
    /// let mut snapshot = BoardSnapshot::new();
    /// let mut card = Card::new("Card", column);
    /// card.swimlane_id = Some(lane);
    /// snapshot.add_card(card);
    ///
    /// assert_eq!(snapshot.derived_swimlane_ids(), vec![lane]);
    /// ```
    #[must_use]
    pub fn derived_swimlane_ids(&self) -> Vec<SwimlaneId> {
        let mut seen = Vec::new();
        for card in &self.cards {
            if let Some(id) = card.swimlane_id
                && !seen.contains(&id)
            {
                seen.push(id);
            }
        }
        seen
    }

    /// Serializes the snapshot to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SerializationFailed`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ModelError::SerializationFailed)
    }

    /// Deserializes a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DeserializationFailed`] if parsing fails.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ModelError::DeserializationFailed)
    }

    /// Validates that every order sequence on the board is dense.
    ///
    /// Checks each card group, the column list, and the explicit swimlane
    /// list for the `0..n-1` no-gap no-duplicate invariant. Intended for
    /// tests and debug assertions; a correctly driven board never fails
    /// this check.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DensityViolation`] naming the collection at
    /// fault.
    pub fn check_density(&self) -> Result<()> {
        for group in self.distinct_groups() {
            let orders: Vec<usize> = self.cards_in_group(&group).iter().map(|c| c.order).collect();
            check_sequence(&orders, &format!("card group {group:?}"))?;
        }

        let column_orders: Vec<usize> = self.columns_ordered().iter().map(|c| c.order).collect();
        check_sequence(&column_orders, "columns")?;

        let lane_orders: Vec<usize> = self.swimlanes_ordered().iter().map(|s| s.order).collect();
        check_sequence(&lane_orders, "swimlanes")
    }

    /// Returns the distinct groups present on the board's cards.
    fn distinct_groups(&self) -> Vec<GroupKey> {
        let mut groups = Vec::new();
        for card in &self.cards {
            let group = card.group();
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }
}

/// Checks that a sorted order sequence equals `0..n-1`.
fn check_sequence(orders: &[usize], scope: &str) -> Result<()> {
    for (expected, &actual) in orders.iter().enumerate() {
        if actual != expected {
            return Err(ModelError::DensityViolation {
                scope: scope.to_string(),
                detail: format!("expected order {expected}, found {actual}"),
            });
        }
    }
    Ok(())
}
