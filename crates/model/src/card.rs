//! Card-related types for the board.
//!
//! This module defines the card entity and its identifier. Cards are the
//! units of work that move across columns and swimlanes; the engine keeps
//! their position consistent and treats every other field as opaque
//! payload supplied by the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::ColumnId;
use crate::group::GroupKey;
use crate::swimlane::SwimlaneId;

/// Unique identifier for a card.
///
/// Uses UUID v4 for globally unique identification.
pub type CardId = uuid::Uuid;

/// A card on the board.
///
/// Each card belongs to exactly one group (a `(column, swimlane)` pair)
/// and carries a zero-based `order` giving its display position within
/// that group. Title, description and tags are host payload that the
/// engine never interprets.
///
/// # Examples
///
/// ```
/// use driftboard_model::{Card, ColumnId};
///
/// let column = ColumnId::new_v4();
/// let card = Card::new("Fix login bug", column);
/// assert_eq!(card.column_id, column);
/// assert_eq!(card.order, 0);
/// assert!(!card.locked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// The column this card currently resides in.
    pub column_id: ColumnId,
    /// The swimlane this card resides in, if the board uses swimlanes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimlane_id: Option<SwimlaneId>,
    /// Zero-based display position within the card's group.
    pub order: usize,
    /// Short summary of the work item.
    pub title: String,
    /// Detailed description of the work item.
    #[serde(default)]
    pub description: String,
    /// Host-defined tags attached to this card.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When `true`, the card is individually marked non-draggable.
    #[serde(default)]
    pub locked: bool,
    /// When this card was created.
    pub created_at: DateTime<Utc>,
    /// When this card was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card in the given column.
    ///
    /// The card starts at order `0` with no swimlane; use
    /// [`BoardSnapshot::add_card`](crate::BoardSnapshot::add_card) to
    /// append it at the correct position within its group.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Card, ColumnId};
    ///
    /// let card = Card::new("Write release notes", ColumnId::new_v4());
    /// assert_eq!(card.title, "Write release notes");
    /// assert!(card.swimlane_id.is_none());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, column_id: ColumnId) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::new_v4(),
            column_id,
            swimlane_id: None,
            order: 0,
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            locked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new card with a specific ID.
    ///
    /// Useful for testing or when recreating cards from host storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Card, CardId, ColumnId};
    ///
    /// let id = CardId::new_v4();
    /// let card = Card::with_id(id, "Card", ColumnId::new_v4());
    /// assert_eq!(card.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: CardId, title: impl Into<String>, column_id: ColumnId) -> Self {
        Self {
            id,
            ..Self::new(title, column_id)
        }
    }

    /// Returns the group this card currently belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Card, ColumnId};
    ///
    /// let column = ColumnId::new_v4();
    /// let card = Card::new("Card", column);
    /// assert_eq!(card.group().column_id, column);
    /// ```
    #[must_use]
    pub fn group(&self) -> GroupKey {
        GroupKey {
            column_id: self.column_id,
            swimlane_id: self.swimlane_id,
        }
    }

    /// Re-assigns the card to a group and refreshes the `updated_at`
    /// timestamp.
    ///
    /// The card's `order` is untouched; callers renumber the affected
    /// groups afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Card, ColumnId, GroupKey};
    ///
    /// let mut card = Card::new("Card", ColumnId::new_v4());
    /// let target = GroupKey::new(ColumnId::new_v4());
    /// card.relocate(&target);
    /// assert_eq!(card.group(), target);
    /// ```
    pub fn relocate(&mut self, group: &GroupKey) {
        self.column_id = group.column_id;
        self.swimlane_id = group.swimlane_id;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_new_creates_with_defaults() {
        let column = ColumnId::new_v4();
        let card = Card::new("Test", column);

        assert_eq!(card.title, "Test");
        assert_eq!(card.column_id, column);
        assert_eq!(card.swimlane_id, None);
        assert_eq!(card.order, 0);
        assert!(card.description.is_empty());
        assert!(card.tags.is_empty());
        assert!(!card.locked);
    }

    #[test]
    fn card_with_id_preserves_id() {
        let id = CardId::new_v4();
        let card = Card::with_id(id, "Test", ColumnId::new_v4());

        assert_eq!(card.id, id);
    }

    #[test]
    fn card_group_reflects_position_fields() {
        let column = ColumnId::new_v4();
        let lane = SwimlaneId::new_v4();
        let mut card = Card::new("Test", column);
        card.swimlane_id = Some(lane);

        let group = card.group();
        assert_eq!(group.column_id, column);
        assert_eq!(group.swimlane_id, Some(lane));
    }

    #[test]
    fn card_relocate_updates_group_and_timestamp() {
        let mut card = Card::new("Test", ColumnId::new_v4());
        let original_updated = card.updated_at;
        let target = GroupKey::in_swimlane(ColumnId::new_v4(), SwimlaneId::new_v4());

        // Small delay to ensure timestamp changes
        std::thread::sleep(std::time::Duration::from_millis(10));

        card.relocate(&target);

        assert_eq!(card.group(), target);
        assert!(card.updated_at > original_updated);
    }

    #[test]
    fn card_relocate_preserves_order() {
        let mut card = Card::new("Test", ColumnId::new_v4());
        card.order = 3;

        card.relocate(&GroupKey::new(ColumnId::new_v4()));
        assert_eq!(card.order, 3);
    }

    #[test]
    fn card_serialization_roundtrip() {
        let mut card = Card::new("Test card", ColumnId::new_v4());
        card.description = "A description".to_string();
        card.tags = vec!["bug".to_string(), "urgent".to_string()];

        let json = serde_json::to_string(&card).expect("serialize");
        let parsed: Card = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(card, parsed);
    }

    #[test]
    fn card_deserializes_without_optional_fields() {
        let column = ColumnId::new_v4();
        let json = format!(
            r#"{{
                "id": "{}",
                "column_id": "{column}",
                "order": 2,
                "title": "Bare card",
                "created_at": "2026-01-15T10:00:00Z",
                "updated_at": "2026-01-15T10:00:00Z"
            }}"#,
            CardId::new_v4(),
        );

        let card: Card = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(card.order, 2);
        assert!(card.swimlane_id.is_none());
        assert!(card.tags.is_empty());
        assert!(!card.locked);
    }
}
