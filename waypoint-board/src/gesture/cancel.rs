//! CancelDrag command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::DragGesture;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Abandon the drag gesture without dropping.
///
/// Returns the gesture to idle and clears all highlight state. No data
/// mutation; safe to call when no drag is active.
#[derive(Debug, Default, Deserialize)]
pub struct CancelDrag;

impl CancelDrag {
    /// Create a new CancelDrag command
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CancelDrag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        if let Some(card_id) = ctx.gesture().await.dragged_card() {
            tracing::debug!(card_id = %card_id, "drag cancelled");
        }

        ctx.set_gesture(DragGesture::Idle).await;
        ctx.clear_highlights().await;
        ctx.set_active_column(None).await;

        Ok(serde_json::to_value(DragGesture::Idle)?)
    }
}
