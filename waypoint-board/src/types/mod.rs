//! Core types for the board engine

mod card;
mod column;
mod gesture;
mod ids;
mod slot;

// Re-export all types
pub use card::Card;
pub use column::{board_columns, ColumnId, ColumnSpec};
pub use gesture::DragGesture;
pub use ids::CardId;
pub use slot::DropSlot;
