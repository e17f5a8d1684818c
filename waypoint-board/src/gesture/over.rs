//! DragOver command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::geometry::nearest_slot;
use crate::types::ColumnId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Pointer moved over a column during a drag.
///
/// Marks the column as the active drop target and highlights exactly one of
/// its rendered slots - the nearest insertion point for the current pointer
/// position. Pure presentation state, no data mutation; repeated calls with
/// the same pointer position highlight the same slot.
#[derive(Debug, Deserialize)]
pub struct DragOver {
    /// Column under the pointer
    pub column: ColumnId,
    /// Pointer vertical coordinate, in layout units
    pub pointer_y: f32,
}

impl DragOver {
    /// Create a new DragOver command
    pub fn new(column: ColumnId, pointer_y: f32) -> Self {
        Self { column, pointer_y }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DragOver {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.clear_highlights().await;

        let slots = ctx.layout(self.column).await;
        match nearest_slot(self.pointer_y, &slots) {
            Some(index) => {
                // Only a column that actually resolved a slot becomes the
                // active drop target
                ctx.set_active_column(Some(self.column)).await;
                ctx.set_highlight(self.column, index).await;
                Ok(json!({
                    "column": self.column,
                    "slot": index,
                    "before": slots[index].before,
                }))
            }
            None => Ok(Value::Null),
        }
    }
}
