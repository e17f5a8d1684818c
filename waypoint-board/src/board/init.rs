//! InitBoard command

use crate::context::BoardContext;
use crate::defaults::default_cards;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::Card;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Reset the board to a seed card set (the defaults if none is given).
/// All transient gesture state is discarded along the way.
#[derive(Debug, Default, Deserialize)]
pub struct InitBoard {
    /// Explicit seed cards; defaults to the built-in set
    pub cards: Option<Vec<Card>>,
}

impl InitBoard {
    /// Reset to the default card set
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to an explicit card set
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards: Some(cards) }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for InitBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let cards = self.cards.clone().unwrap_or_else(default_cards);

        ctx.reset(cards).await?;
        ctx.reset_gesture().await;

        let count = ctx.card_count().await;
        tracing::debug!(cards = count, "board reset");
        Ok(serde_json::to_value(ctx.snapshot().await)?)
    }
}
