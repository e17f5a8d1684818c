//! GetBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::Execute;
use crate::types::board_columns;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Read-only snapshot of the board grouped by column.
///
/// This is the view the render collaborator consumes: each column carries
/// its presentation metadata plus its cards in global-sequence order.
#[derive(Debug, Default, Deserialize)]
pub struct GetBoard;

impl GetBoard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value, BoardError> {
        let mut columns = Vec::with_capacity(4);
        let mut total = 0usize;

        for spec in board_columns() {
            let cards = ctx.cards_in(spec.id).await;
            total += cards.len();
            columns.push(json!({
                "id": spec.id,
                "title": spec.title,
                "accent": spec.accent,
                "cards": cards,
            }));
        }

        Ok(json!({ "columns": columns, "total": total }))
    }
}
