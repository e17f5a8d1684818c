//! DeleteCard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::CardId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Delay before a dropped-on-delete card is actually removed, leaving time
/// for the deletion animation to play.
pub const DELETE_DELAY_MS: u64 = 800;

/// Remove a card after the fixed visible delay.
///
/// Terminal and uncancellable: once scheduled, the removal fires even if
/// the gesture state has long been discarded. If the card is already gone
/// when the timer fires (e.g. a second delete of the same id), the removal
/// is a no-op.
#[derive(Debug, Deserialize)]
pub struct DeleteCard {
    /// The card id to remove
    pub id: CardId,
}

impl DeleteCard {
    /// Create a new DeleteCard command
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteCard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let ctx = ctx.clone();
        let id = self.id.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(DELETE_DELAY_MS)).await;
            match ctx.remove_card(&id).await {
                Some(card) => tracing::debug!(id = %card.id, "card deleted"),
                None => tracing::debug!(id = %id, "deferred delete found no card"),
            }
        });

        Ok(json!({ "scheduled": true, "delay_ms": DELETE_DELAY_MS }))
    }
}
