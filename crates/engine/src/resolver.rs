//! Move resolution.
//!
//! Pure functions that, given a requested card or column relocation,
//! produce a new order-consistent collection. A resolver call never
//! mutates its input: it returns a fresh vector with every affected
//! group renumbered to a dense `0..n-1` sequence, or `None` when the
//! request changes nothing (unknown subject, or a position identical to
//! the current one).

use driftboard_model::{Card, CardId, Column, ColumnId, GroupKey, Grouping};

use crate::events::Placement;

/// The result of a card move that changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMoveOutcome {
    /// The full replacement card collection.
    pub cards: Vec<Card>,
    /// The moved card's placement before the move.
    pub from: Placement,
    /// The moved card's placement after the move.
    pub to: Placement,
}

/// The result of a column move that changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMoveOutcome {
    /// The full replacement column collection.
    pub columns: Vec<Column>,
    /// The moved column's placement before the move.
    pub from: Placement,
    /// The moved column's placement after the move.
    pub to: Placement,
}

/// Computes the card collection after moving one card to a target group
/// and index.
///
/// The target index is clamped to `[0, target group size]`. Cards fall
/// into three buckets: the target group (which receives the moved card
/// and is renumbered), the source group (renumbered to close the gap
/// when it differs from the target), and all other cards, which pass
/// through untouched. The sequence of the returned vector carries no
/// display meaning; only `order` within a group does.
///
/// Returns `None`, meaning the input is unchanged, when the card id is
/// unknown (a stale reference is a silent no-op, not a failure) or when
/// the request resolves to the card's current position.
///
/// # Examples
///
/// ```
/// use driftboard_engine::resolver::resolve_card_move;
/// use driftboard_model::{BoardSnapshot, Card, ColumnId, GroupKey, Grouping};
///
/// let from = ColumnId::new_v4();
/// let to = ColumnId::new_v4();
/// let mut snapshot = BoardSnapshot::new();
/// let card = Card::new("Card", from);
/// let card_id = card.id;
/// snapshot.add_card(card);
///
/// let outcome = resolve_card_move(
///     &snapshot.cards,
///     card_id,
///     &GroupKey::new(to),
///     0,
///     Grouping::BySwimlane,
/// )
/// .expect("cross-group move changes state");
/// assert_eq!(outcome.cards[0].column_id, to);
/// ```
#[must_use]
pub fn resolve_card_move(
    cards: &[Card],
    card_id: CardId,
    to_group: &GroupKey,
    to_index: usize,
    grouping: Grouping,
) -> Option<CardMoveOutcome> {
    let mut moved = cards.iter().find(|c| c.id == card_id)?.clone();
    let to_group = grouping.normalize(*to_group);
    let from_group = grouping.group_of(&moved);
    let from_index = moved.order;
    let same_group = from_group == to_group;

    // Target group, without the moved card, in display order.
    let mut target: Vec<Card> = cards
        .iter()
        .filter(|c| c.id != card_id && grouping.contains(&to_group, c))
        .cloned()
        .collect();
    target.sort_by_key(|c| c.order);

    let to_index = to_index.min(target.len());
    if same_group && to_index == from_index {
        return None;
    }

    moved.relocate(&to_group);
    target.insert(to_index, moved);
    for (order, card) in target.iter_mut().enumerate() {
        card.order = order;
    }

    let mut next: Vec<Card> = cards
        .iter()
        .filter(|c| {
            c.id != card_id
                && !grouping.contains(&to_group, c)
                && (same_group || !grouping.contains(&from_group, c))
        })
        .cloned()
        .collect();

    // Close the gap the moved card left behind.
    if !same_group {
        let mut source: Vec<Card> = cards
            .iter()
            .filter(|c| c.id != card_id && grouping.contains(&from_group, c))
            .cloned()
            .collect();
        source.sort_by_key(|c| c.order);
        for (order, card) in source.iter_mut().enumerate() {
            card.order = order;
        }
        next.extend(source);
    }
    next.extend(target);

    Some(CardMoveOutcome {
        cards: next,
        from: Placement::Card {
            group: from_group,
            index: from_index,
        },
        to: Placement::Card {
            group: to_group,
            index: to_index,
        },
    })
}

/// Computes the column collection after moving one column to a target
/// index.
///
/// The column is removed from its current position, reinserted at the
/// clamped target index, and every column's `order` is renumbered to its
/// new position.
///
/// Returns `None` when the column id is unknown or the clamped index
/// equals the column's current position.
///
/// # Examples
///
/// ```
/// use driftboard_engine::resolver::resolve_column_move;
/// use driftboard_model::{BoardSnapshot, Column};
///
/// let mut snapshot = BoardSnapshot::new();
/// let first = Column::new("First");
/// let first_id = first.id;
/// snapshot.add_column(first);
/// snapshot.add_column(Column::new("Second"));
///
/// let outcome = resolve_column_move(&snapshot.columns, first_id, 1)
///     .expect("reorder changes state");
/// let titles: Vec<&str> = outcome.columns.iter().map(|c| c.title.as_str()).collect();
/// assert_eq!(titles, vec!["Second", "First"]);
/// ```
#[must_use]
pub fn resolve_column_move(
    columns: &[Column],
    column_id: ColumnId,
    to_index: usize,
) -> Option<ColumnMoveOutcome> {
    let mut ordered: Vec<Column> = columns.to_vec();
    ordered.sort_by_key(|c| c.order);

    let from_index = ordered.iter().position(|c| c.id == column_id)?;
    let column = ordered.remove(from_index);
    let to_index = to_index.min(ordered.len());
    if to_index == from_index {
        return None;
    }

    ordered.insert(to_index, column);
    for (order, column) in ordered.iter_mut().enumerate() {
        column.order = order;
    }

    Some(ColumnMoveOutcome {
        columns: ordered,
        from: Placement::Column { index: from_index },
        to: Placement::Column { index: to_index },
    })
}
