//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations.
///
/// The engine deliberately treats referential misses, self-referential drops
/// and empty-title adds as silent no-ops rather than errors; these variants
/// cover genuine interface-boundary failures only.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Column id outside the fixed column set
    #[error("unknown column: {id}")]
    UnknownColumn { id: String },

    /// Two cards with the same id in a seed set
    #[error("duplicate card ID: {id}")]
    DuplicateId { id: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an unknown column error
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn { id: id.into() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }
}
