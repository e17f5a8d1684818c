//! ListCards command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::ColumnId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// List cards in global-sequence order, optionally filtered to one column
#[derive(Debug, Default, Deserialize)]
pub struct ListCards {
    /// Restrict to a single column
    pub column: Option<ColumnId>,
}

impl ListCards {
    /// List every card on the board
    pub fn new() -> Self {
        Self::default()
    }

    /// List one column's cards
    pub fn in_column(column: ColumnId) -> Self {
        Self {
            column: Some(column),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListCards {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let cards = match self.column {
            Some(column) => ctx.cards_in(column).await,
            None => ctx.snapshot().await,
        };
        Ok(serde_json::to_value(cards)?)
    }
}
