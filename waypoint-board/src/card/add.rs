//! AddCard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::{Card, ColumnId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Add a new card to the end of a column.
///
/// The title is trimmed; a whitespace-only title is a silent no-op (the
/// add form keeps its state in that case). The card gets a fresh unique id
/// and goes to the end of the global sequence, so it renders last within
/// its column.
#[derive(Debug, Deserialize)]
pub struct AddCard {
    /// Destination column
    pub column: ColumnId,
    /// The card title; trimmed before use
    pub title: String,
}

impl AddCard {
    /// Create a new AddCard command
    pub fn new(column: ColumnId, title: impl Into<String>) -> Self {
        Self {
            column,
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddCard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let title = self.title.trim();
        if title.is_empty() {
            tracing::debug!(column = %self.column, "empty title, card not added");
            return Ok(Value::Null);
        }

        let card = Card::new(title, self.column);
        let inserted = ctx.append_card(card.clone()).await;
        // Fresh ULIDs never collide within a session
        debug_assert!(inserted);

        Ok(serde_json::to_value(card)?)
    }
}
