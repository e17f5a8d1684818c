//! The `Execute` trait for board operations.
//!
//! Operations are structs where the fields ARE the parameters - no
//! duplication. Each operation implements `Execute` against a context that
//! provides data access, and returns a JSON value describing the outcome.

use async_trait::async_trait;
use serde_json::Value;

/// Execute an operation against a context of type `C`, failing with `E`.
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> Result<Value, E>;
}
