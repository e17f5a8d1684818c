//! Drop slot: a candidate insertion point during a drag gesture

use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// One rendered insertion marker within a column.
///
/// The render collaborator draws one slot before each card plus one trailing
/// slot per column. Slots are ephemeral: re-registered on every render,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSlot {
    /// Card this slot precedes; `None` is the end-of-column slot
    /// (insert after all existing cards of the column).
    pub before: Option<CardId>,
    /// Vertical offset of the rendered marker, in layout units.
    pub top: f32,
}

impl DropSlot {
    /// Slot immediately before the given card
    pub fn before(card: impl Into<CardId>, top: f32) -> Self {
        Self {
            before: Some(card.into()),
            top,
        }
    }

    /// The trailing end-of-column slot
    pub fn end(top: f32) -> Self {
        Self { before: None, top }
    }

    /// Whether this is the end-of-column slot
    pub fn is_end(&self) -> bool {
        self.before.is_none()
    }
}
