//! Drag gesture state

use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// State of the (single) drag gesture.
///
/// The dragged card's identity travels in this value rather than in a
/// loosely typed transfer channel. The whole gesture is transient:
/// `Idle -> Dragging -> Idle`, with state discarded at gesture end
/// regardless of outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        card_id: CardId,
    },
}

impl DragGesture {
    /// Start dragging the given card
    pub fn dragging(card_id: impl Into<CardId>) -> Self {
        Self::Dragging {
            card_id: card_id.into(),
        }
    }

    /// Check if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the dragged card id, if a gesture is in progress
    pub fn dragged_card(&self) -> Option<&CardId> {
        match self {
            Self::Idle => None,
            Self::Dragging { card_id } => Some(card_id),
        }
    }
}
