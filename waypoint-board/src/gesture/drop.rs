//! CompleteDrop command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::geometry::nearest_slot;
use crate::types::{CardId, ColumnId, DragGesture};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Finish the drag gesture by dropping on a column.
///
/// Resolves the insertion point with the same nearest-slot computation as
/// drag-over, then splices the dragged card out of the global sequence and
/// back in at the resolved position, reassigning its column. Whatever the
/// outcome, the gesture returns to idle and all highlight state is cleared.
///
/// Silent no-ops, by design (a lost drop beats an error dialog for a
/// cosmetic action): no gesture in flight, dropping a card immediately
/// before itself, or a dragged card that is no longer in the sequence.
#[derive(Debug, Deserialize)]
pub struct CompleteDrop {
    /// Destination column
    pub column: ColumnId,
    /// Pointer vertical coordinate at release, in layout units
    pub pointer_y: f32,
}

impl CompleteDrop {
    /// Create a new CompleteDrop command
    pub fn new(column: ColumnId, pointer_y: f32) -> Self {
        Self { column, pointer_y }
    }

    /// Resolve the insertion point: `Some(id)` inserts before that card,
    /// `None` appends at the end of the global sequence.
    async fn resolve_before(&self, ctx: &BoardContext) -> Option<CardId> {
        let slots = ctx.layout(self.column).await;
        let index = nearest_slot(self.pointer_y, &slots)?;
        slots[index].before.clone()
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CompleteDrop {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let gesture = ctx.gesture().await;

        // The gesture ends here no matter what happens below
        ctx.set_gesture(DragGesture::Idle).await;
        ctx.clear_highlights().await;
        ctx.set_active_column(None).await;

        let Some(card_id) = gesture.dragged_card().cloned() else {
            tracing::debug!(column = %self.column, "drop without an active drag");
            return Ok(Value::Null);
        };

        let before = self.resolve_before(ctx).await;

        // Dropped immediately before itself: order unchanged
        if before.as_ref() == Some(&card_id) {
            return Ok(Value::Null);
        }

        // One atomic splice; a deferred delete firing mid-drop can remove
        // the anchor or the dragged card, never half of the move.
        let Some((card, anchor_gone)) = ctx
            .relocate_card(&card_id, self.column, before.as_ref())
            .await
        else {
            tracing::debug!(card_id = %card_id, "dragged card vanished before drop");
            return Ok(Value::Null);
        };

        if anchor_gone {
            // Stale slot id; keep the forgiving append but make it visible
            if let Some(before_id) = &before {
                tracing::warn!(
                    before_id = %before_id,
                    card_id = %card.id,
                    "drop target no longer on the board, appending at end"
                );
            }
        }

        tracing::debug!(card_id = %card.id, column = %self.column, "card moved");
        Ok(serde_json::to_value(card)?)
    }
}
