//! Group identification.
//!
//! A group is the set of cards sharing the same `(column, swimlane)`
//! pair. It is the unit within which card `order` values are dense:
//! `0..n-1`, no gaps, no duplicates.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::column::ColumnId;
use crate::swimlane::SwimlaneId;

/// Identifies a group of cards: one column, optionally one swimlane.
///
/// Two cards are in the same group iff their column ids match and their
/// swimlane ids match (including both being `None`).
///
/// # Examples
///
/// ```
/// use driftboard_model::{ColumnId, GroupKey, SwimlaneId};
///
/// let column = ColumnId::new_v4();
/// let plain = GroupKey::new(column);
/// let laned = GroupKey::in_swimlane(column, SwimlaneId::new_v4());
/// assert_ne!(plain, laned);
/// assert_eq!(laned.without_swimlane(), plain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    /// The column component of the group.
    pub column_id: ColumnId,
    /// The swimlane component of the group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimlane_id: Option<SwimlaneId>,
}

impl GroupKey {
    /// Creates a group key for a column without a swimlane.
    #[must_use]
    pub const fn new(column_id: ColumnId) -> Self {
        Self {
            column_id,
            swimlane_id: None,
        }
    }

    /// Creates a group key for a column within a swimlane.
    #[must_use]
    pub const fn in_swimlane(column_id: ColumnId, swimlane_id: SwimlaneId) -> Self {
        Self {
            column_id,
            swimlane_id: Some(swimlane_id),
        }
    }

    /// Returns the same group with the swimlane component stripped.
    ///
    /// Used when swimlanes are disabled and all cards are treated as one
    /// implicit swimlane.
    #[must_use]
    pub const fn without_swimlane(self) -> Self {
        Self {
            column_id: self.column_id,
            swimlane_id: None,
        }
    }

    /// Returns `true` if the given card belongs to this group.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Card, ColumnId, GroupKey};
    ///
    /// let column = ColumnId::new_v4();
    /// let card = Card::new("Card", column);
    /// assert!(GroupKey::new(column).contains(&card));
    /// assert!(!GroupKey::new(ColumnId::new_v4()).contains(&card));
    /// ```
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        card.column_id == self.column_id && card.swimlane_id == self.swimlane_id
    }
}

/// How cards are partitioned into groups.
///
/// Boards with swimlanes enabled group cards by the full
/// `(column, swimlane)` pair; boards without treat each column as a
/// single group and ignore the swimlane component everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// Group by `(column, swimlane)`.
    #[default]
    BySwimlane,
    /// Group by column only; swimlane ids are ignored.
    ByColumnOnly,
}

impl Grouping {
    /// Returns the group the given card belongs to under this grouping.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftboard_model::{Card, ColumnId, Grouping, SwimlaneId};
    ///
    /// let mut card = Card::new("Card", ColumnId::new_v4());
    /// card.swimlane_id = Some(SwimlaneId::new_v4());
    ///
    /// assert!(Grouping::BySwimlane.group_of(&card).swimlane_id.is_some());
    /// assert!(Grouping::ByColumnOnly.group_of(&card).swimlane_id.is_none());
    /// ```
    #[must_use]
    pub fn group_of(self, card: &Card) -> GroupKey {
        match self {
            Self::BySwimlane => card.group(),
            Self::ByColumnOnly => card.group().without_swimlane(),
        }
    }

    /// Normalizes a requested group to this grouping.
    #[must_use]
    pub const fn normalize(self, group: GroupKey) -> GroupKey {
        match self {
            Self::BySwimlane => group,
            Self::ByColumnOnly => group.without_swimlane(),
        }
    }

    /// Returns `true` if the card belongs to the (normalized) group
    /// under this grouping.
    #[must_use]
    pub fn contains(self, group: &GroupKey, card: &Card) -> bool {
        self.normalize(*group) == self.group_of(card)
    }
}
