//! Default seed cards for a fresh board.
//!
//! A new (or reset) session starts from this set; there is no durable
//! persistence behind it.

use crate::types::{Card, ColumnId};

/// The default card set, one card per column
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new("Research user needs", ColumnId::Backlog).with_id("1"),
        Card::new("Create wireframes", ColumnId::Todo).with_id("2"),
        Card::new("Design UI components", ColumnId::Doing).with_id("3"),
        Card::new("Write documentation", ColumnId::Done).with_id("4"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cards_cover_every_column() {
        let cards = default_cards();
        assert_eq!(cards.len(), 4);
        for column in ColumnId::ALL {
            assert!(cards.iter().any(|c| c.column == column));
        }
    }

    #[test]
    fn test_default_ids_are_distinct() {
        let cards = default_cards();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
