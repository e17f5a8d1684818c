//! Kanban board reordering engine
//!
//! This crate owns a workflow board's cards as a single flat ordered
//! sequence shared by all columns, and resolves drag-and-drop gestures
//! against rendered drop-slot geometry. Per-column views are derived by
//! filtering; cross-column moves and stable relative ordering both fall out
//! of the one global order.
//!
//! ## Overview
//!
//! - **One sequence, four columns** - a card's position in the global
//!   sequence is its render order within its column after filtering
//! - **Pure geometry** - nearest-insertion-point resolution is a pure
//!   function over (pointer position, rendered slots), testable without a
//!   rendering engine
//! - **Forgiving by design** - referential misses, self-drops and empty
//!   titles are silent no-ops, never user-facing errors
//! - **In-memory only** - state lives for the session; a reset returns the
//!   default card set
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use waypoint_board::{BoardContext, ColumnId, Execute};
//! use waypoint_board::board::InitBoard;
//! use waypoint_board::card::AddCard;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::new();
//! InitBoard::new().execute(&ctx).await?;
//!
//! let card = AddCard::new(ColumnId::Todo, "Prepare portfolio")
//!     .execute(&ctx).await?;
//!
//! println!("Created card: {}", card["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! A drag gesture is three operations against the same context: `BeginDrag`
//! records the card's identity, `DragOver` highlights the nearest rendered
//! slot for the pointer, and `CompleteDrop` splices the card into its new
//! position. The render collaborator registers each column's slot layout on
//! the context after every render, so drag-over and drop resolve against
//! identical geometry.

mod context;
mod defaults;
mod error;
mod execute;

pub mod geometry;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod gesture;

pub use context::BoardContext;
pub use defaults::default_cards;
pub use error::{BoardError, Result};
pub use execute::Execute;

// Re-export commonly used types
pub use types::{board_columns, Card, CardId, ColumnId, ColumnSpec, DragGesture, DropSlot};
