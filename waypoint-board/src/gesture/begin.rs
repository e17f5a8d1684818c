//! BeginDrag command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::{CardId, DragGesture};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Start dragging a card.
///
/// Attaches the card's identity to the gesture state; the sequence is not
/// touched until the drop completes. Starting a drag while one is already
/// in flight is ignored - the UI supports exactly one active drag.
#[derive(Debug, Deserialize)]
pub struct BeginDrag {
    /// The card being dragged
    pub card_id: CardId,
}

impl BeginDrag {
    /// Create a new BeginDrag command
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for BeginDrag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let current = ctx.gesture().await;
        if !current.is_idle() {
            tracing::debug!(card_id = %self.card_id, "drag already in progress, ignoring");
            return Ok(serde_json::to_value(current)?);
        }

        let gesture = DragGesture::dragging(self.card_id.clone());
        tracing::debug!(card_id = %self.card_id, "drag started");
        ctx.set_gesture(gesture.clone()).await;

        Ok(serde_json::to_value(gesture)?)
    }
}
