//! BoardContext - in-memory state primitives for the board engine
//!
//! The context provides access to state, not business logic. Operations do
//! all the work. It owns the single global card sequence (the source of
//! truth for both cross-column and intra-column order), the drag gesture
//! state, the rendered slot layouts, and the transient highlight state.

use crate::error::{BoardError, Result};
use crate::types::{Card, CardId, ColumnId, DragGesture, DropSlot};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The global card sequence plus an id index for O(1) existence checks.
#[derive(Default)]
struct BoardState {
    cards: Vec<Card>,
    ids: HashSet<CardId>,
}

/// Transient interaction state, discarded at gesture end.
#[derive(Default)]
struct GestureState {
    drag: DragGesture,
    /// Rendered drop slots per column, registered by the render collaborator.
    layouts: HashMap<ColumnId, Vec<DropSlot>>,
    /// The single highlighted slot, if any: column + index into its layout.
    highlighted: Option<(ColumnId, usize)>,
    /// Column currently marked as an active drop target.
    active_column: Option<ColumnId>,
}

/// Context passed to every operation. Cheap to clone; clones share state,
/// which lets the deferred-delete timer hold its own handle.
#[derive(Clone, Default)]
pub struct BoardContext {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    board: RwLock<BoardState>,
    gesture: RwLock<GestureState>,
}

impl BoardContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Card sequence
    // =========================================================================

    /// The full global sequence, in order
    pub async fn snapshot(&self) -> Vec<Card> {
        self.inner.board.read().await.cards.clone()
    }

    /// Cards of one column, in global-sequence order (the derived view)
    pub async fn cards_in(&self, column: ColumnId) -> Vec<Card> {
        self.inner
            .board
            .read()
            .await
            .cards
            .iter()
            .filter(|c| c.column == column)
            .cloned()
            .collect()
    }

    /// Number of cards across all columns
    pub async fn card_count(&self) -> usize {
        self.inner.board.read().await.cards.len()
    }

    /// O(1) existence check
    pub async fn contains(&self, id: &CardId) -> bool {
        self.inner.board.read().await.ids.contains(id)
    }

    /// Find a card by id
    pub async fn find_card(&self, id: &CardId) -> Option<Card> {
        self.inner
            .board
            .read()
            .await
            .cards
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    /// Append a card to the end of the global sequence.
    /// Returns false (and leaves the sequence unchanged) on a duplicate id.
    pub async fn append_card(&self, card: Card) -> bool {
        let mut board = self.inner.board.write().await;
        if !board.ids.insert(card.id.clone()) {
            return false;
        }
        board.cards.push(card);
        true
    }

    /// Splice a card out of the global sequence and back in before `before`
    /// (or at the end when `before` is `None`), reassigning its column.
    ///
    /// The whole splice happens under one write lock, so a deferred delete
    /// firing on another task can never observe the card half-moved or
    /// invalidate the insertion index. Returns the moved card plus a flag
    /// telling whether the requested anchor was gone (in which case the
    /// card went to the end of the sequence), or `None` if the card itself
    /// is no longer on the board.
    pub async fn relocate_card(
        &self,
        id: &CardId,
        column: ColumnId,
        before: Option<&CardId>,
    ) -> Option<(Card, bool)> {
        let mut board = self.inner.board.write().await;

        let index = board.cards.iter().position(|c| &c.id == id)?;
        let mut card = board.cards.remove(index);
        card.column = column;

        let (dest, anchor_gone) = match before {
            None => (board.cards.len(), false),
            Some(before_id) => match board.cards.iter().position(|c| &c.id == before_id) {
                Some(i) => (i, false),
                None => (board.cards.len(), true),
            },
        };
        board.cards.insert(dest, card.clone());

        Some((card, anchor_gone))
    }

    /// Remove a card from the global sequence, returning it if present
    pub async fn remove_card(&self, id: &CardId) -> Option<Card> {
        let mut board = self.inner.board.write().await;
        let index = board.cards.iter().position(|c| &c.id == id)?;
        board.ids.remove(id);
        Some(board.cards.remove(index))
    }

    /// Replace the whole sequence (board reset). Fails on duplicate ids in
    /// the seed set; the previous sequence is kept intact on failure.
    pub async fn reset(&self, cards: Vec<Card>) -> Result<()> {
        let mut ids = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !ids.insert(card.id.clone()) {
                return Err(BoardError::duplicate_id(card.id.as_str()));
            }
        }

        let mut board = self.inner.board.write().await;
        board.cards = cards;
        board.ids = ids;
        Ok(())
    }

    // =========================================================================
    // Gesture
    // =========================================================================

    /// Current drag gesture state
    pub async fn gesture(&self) -> DragGesture {
        self.inner.gesture.read().await.drag.clone()
    }

    /// Set the drag gesture state
    pub async fn set_gesture(&self, drag: DragGesture) {
        self.inner.gesture.write().await.drag = drag;
    }

    // =========================================================================
    // Rendered layouts and highlights
    // =========================================================================

    /// Register a column's rendered drop slots. Called by the render
    /// collaborator after each render; drag-over and drop both resolve
    /// against this registry so they see identical geometry.
    pub async fn register_layout(&self, column: ColumnId, slots: Vec<DropSlot>) {
        self.inner.gesture.write().await.layouts.insert(column, slots);
    }

    /// The rendered slots of a column (empty if never registered)
    pub async fn layout(&self, column: ColumnId) -> Vec<DropSlot> {
        self.inner
            .gesture
            .read()
            .await
            .layouts
            .get(&column)
            .cloned()
            .unwrap_or_default()
    }

    /// Highlight exactly one slot, clearing any other highlight first
    pub async fn set_highlight(&self, column: ColumnId, slot_index: usize) {
        self.inner.gesture.write().await.highlighted = Some((column, slot_index));
    }

    /// The currently highlighted slot, if any
    pub async fn highlighted(&self) -> Option<(ColumnId, usize)> {
        self.inner.gesture.read().await.highlighted
    }

    /// Clear all slot highlights
    pub async fn clear_highlights(&self) {
        self.inner.gesture.write().await.highlighted = None;
    }

    /// Mark or unmark a column as the active drop target
    pub async fn set_active_column(&self, column: Option<ColumnId>) {
        self.inner.gesture.write().await.active_column = column;
    }

    /// The active drop target column, if any
    pub async fn active_column(&self) -> Option<ColumnId> {
        self.inner.gesture.read().await.active_column
    }

    /// Drop all transient interaction state: gesture, layouts, highlights
    pub async fn reset_gesture(&self) {
        let mut gesture = self.inner.gesture.write().await;
        *gesture = GestureState::default();
    }
}
