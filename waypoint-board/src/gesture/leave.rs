//! DragLeave command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::types::ColumnId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Pointer left a column mid-drag.
///
/// Clears the column's active-target flag and all slot highlights. The
/// gesture itself stays in flight; only the presentation state resets.
#[derive(Debug, Deserialize)]
pub struct DragLeave {
    /// Column the pointer left
    pub column: ColumnId,
}

impl DragLeave {
    /// Create a new DragLeave command
    pub fn new(column: ColumnId) -> Self {
        Self { column }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DragLeave {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        if ctx.active_column().await == Some(self.column) {
            ctx.set_active_column(None).await;
        }
        ctx.clear_highlights().await;
        Ok(Value::Null)
    }
}
