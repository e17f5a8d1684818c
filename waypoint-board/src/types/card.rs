//! Card type: one task on the board

use super::column::ColumnId;
use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// Cards live in a single flat ordered sequence shared by all columns; a
/// card's position in that sequence determines its render order within its
/// column after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column: ColumnId,
}

impl Card {
    /// Create a new card with a fresh unique id
    pub fn new(title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            column,
        }
    }

    /// Override the generated id (used for seed sets with fixed ids)
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = id.into();
        self
    }
}
