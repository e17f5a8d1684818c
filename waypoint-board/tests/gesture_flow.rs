//! End-to-end drag gesture flows through the public API.
//!
//! A fixed-row-height layout stands in for the render collaborator: after
//! every mutation it re-registers each column's drop slots, one before each
//! card plus the trailing end-of-column slot.

use std::collections::HashSet;
use waypoint_board::board::InitBoard;
use waypoint_board::card::AddCard;
use waypoint_board::gesture::{BeginDrag, CancelDrag, CompleteDrop, DragOver};
use waypoint_board::{BoardContext, Card, ColumnId, DropSlot, Execute};

const ROW_HEIGHT: f32 = 60.0;

/// Register slot layouts the way a renderer laying cards out at a fixed
/// row height would.
async fn render(ctx: &BoardContext) {
    for column in ColumnId::ALL {
        let cards = ctx.cards_in(column).await;
        let mut slots: Vec<DropSlot> = cards
            .iter()
            .enumerate()
            .map(|(row, card)| DropSlot::before(card.id.clone(), row as f32 * ROW_HEIGHT))
            .collect();
        slots.push(DropSlot::end(cards.len() as f32 * ROW_HEIGHT));
        ctx.register_layout(column, slots).await;
    }
}

/// Drag a card and drop it on a column at the given pointer height.
async fn drag_and_drop(ctx: &BoardContext, card_id: &str, column: ColumnId, pointer_y: f32) {
    render(ctx).await;
    BeginDrag::new(card_id).execute(ctx).await.unwrap();
    DragOver::new(column, pointer_y).execute(ctx).await.unwrap();
    CompleteDrop::new(column, pointer_y)
        .execute(ctx)
        .await
        .unwrap();
}

async fn order(ctx: &BoardContext) -> Vec<String> {
    ctx.snapshot()
        .await
        .into_iter()
        .map(|c| c.id.as_str().to_string())
        .collect()
}

fn assert_invariants(cards: &[Card]) {
    // No two cards share an id
    let mut seen = HashSet::new();
    for card in cards {
        assert!(seen.insert(card.id.clone()), "duplicate id {}", card.id);
    }
}

#[tokio::test]
async fn default_board_drag_to_end_of_doing() {
    let ctx = BoardContext::new();
    InitBoard::new().execute(&ctx).await.unwrap();

    // Card "2" dropped below everything in "doing": the end slot resolves,
    // which appends at the end of the *global* sequence.
    drag_and_drop(&ctx, "2", ColumnId::Doing, 500.0).await;

    assert_eq!(order(&ctx).await, ["1", "3", "4", "2"]);
    let moved = ctx.find_card(&"2".into()).await.unwrap();
    assert_eq!(moved.column, ColumnId::Doing);
    assert_invariants(&ctx.snapshot().await);
}

#[tokio::test]
async fn cross_column_move_lands_before_the_target_card() {
    let ctx = BoardContext::new();
    InitBoard::with_cards(vec![
        Card::new("A", ColumnId::Backlog).with_id("A"),
        Card::new("B", ColumnId::Todo).with_id("B"),
        Card::new("C", ColumnId::Todo).with_id("C"),
    ])
    .execute(&ctx)
    .await
    .unwrap();

    // Pointer over the gap before "C" (row 1 of the todo column)
    drag_and_drop(&ctx, "A", ColumnId::Todo, ROW_HEIGHT + 10.0).await;

    assert_eq!(order(&ctx).await, ["B", "A", "C"]);
    assert_eq!(
        ctx.find_card(&"A".into()).await.unwrap().column,
        ColumnId::Todo
    );
}

#[tokio::test]
async fn reorder_within_a_column() {
    let ctx = BoardContext::new();
    InitBoard::with_cards(vec![
        Card::new("x", ColumnId::Todo).with_id("x"),
        Card::new("y", ColumnId::Todo).with_id("y"),
        Card::new("z", ColumnId::Todo).with_id("z"),
    ])
    .execute(&ctx)
    .await
    .unwrap();

    // Drag "z" to the top of the column
    drag_and_drop(&ctx, "z", ColumnId::Todo, -100.0).await;

    assert_eq!(order(&ctx).await, ["z", "x", "y"]);
}

#[tokio::test]
async fn self_drop_leaves_the_sequence_identical() {
    let ctx = BoardContext::new();
    InitBoard::new().execute(&ctx).await.unwrap();
    let before = ctx.snapshot().await;

    // Card "2" sits alone in todo; the nearest slot at its own top is the
    // slot before itself.
    drag_and_drop(&ctx, "2", ColumnId::Todo, -100.0).await;

    assert_eq!(ctx.snapshot().await, before);
}

#[tokio::test]
async fn cancelled_drag_mutates_nothing() {
    let ctx = BoardContext::new();
    InitBoard::new().execute(&ctx).await.unwrap();
    let before = ctx.snapshot().await;

    render(&ctx).await;
    BeginDrag::new("3").execute(&ctx).await.unwrap();
    DragOver::new(ColumnId::Done, 20.0).execute(&ctx).await.unwrap();
    CancelDrag::new().execute(&ctx).await.unwrap();

    assert_eq!(ctx.snapshot().await, before);
    assert!(ctx.gesture().await.is_idle());
    assert!(ctx.highlighted().await.is_none());
}

#[tokio::test]
async fn filter_consistency_survives_a_gesture_storm() {
    let ctx = BoardContext::new();
    InitBoard::new().execute(&ctx).await.unwrap();

    AddCard::new(ColumnId::Todo, "Review offers")
        .execute(&ctx)
        .await
        .unwrap();
    drag_and_drop(&ctx, "1", ColumnId::Done, 500.0).await;
    drag_and_drop(&ctx, "4", ColumnId::Backlog, -50.0).await;
    drag_and_drop(&ctx, "2", ColumnId::Doing, 10.0).await;

    let cards = ctx.snapshot().await;
    assert_invariants(&cards);
    assert_eq!(cards.len(), 5);

    // Every card shows up under exactly the column it claims
    for column in ColumnId::ALL {
        for card in ctx.cards_in(column).await {
            assert_eq!(card.column, column);
        }
    }
}

#[tokio::test]
async fn drag_over_highlight_is_stable_across_repeats() {
    let ctx = BoardContext::new();
    InitBoard::new().execute(&ctx).await.unwrap();
    render(&ctx).await;

    BeginDrag::new("1").execute(&ctx).await.unwrap();
    let first = DragOver::new(ColumnId::Todo, 42.0)
        .execute(&ctx)
        .await
        .unwrap();
    for _ in 0..3 {
        let again = DragOver::new(ColumnId::Todo, 42.0)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(again, first);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn drop_splice_survives_concurrent_removals() {
    // Deferred deletes run on their own tasks and can fire mid-drop; the
    // dragged card must land somewhere on the board every time.
    for _ in 0..500 {
        let ctx = BoardContext::new();
        InitBoard::with_cards(vec![
            Card::new("A", ColumnId::Backlog).with_id("A"),
            Card::new("B", ColumnId::Todo).with_id("B"),
            Card::new("C", ColumnId::Todo).with_id("C"),
            Card::new("D", ColumnId::Todo).with_id("D"),
        ])
        .execute(&ctx)
        .await
        .unwrap();

        render(&ctx).await;
        BeginDrag::new("A").execute(&ctx).await.unwrap();

        let removers: Vec<_> = ["B", "C"]
            .into_iter()
            .map(|id| {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    ctx.remove_card(&id.into()).await;
                })
            })
            .collect();

        // Pointer over the gap before "D" (row 2 of the todo column)
        CompleteDrop::new(ColumnId::Todo, 2.0 * ROW_HEIGHT + 10.0)
            .execute(&ctx)
            .await
            .unwrap();
        for remover in removers {
            remover.await.unwrap();
        }

        let moved = ctx.find_card(&"A".into()).await;
        assert!(moved.is_some(), "dragged card vanished from the board");
        assert_eq!(moved.unwrap().column, ColumnId::Todo);
        assert_invariants(&ctx.snapshot().await);
    }
}

#[tokio::test]
async fn empty_title_add_then_real_add() {
    let ctx = BoardContext::new();
    InitBoard::new().execute(&ctx).await.unwrap();

    let rejected = AddCard::new(ColumnId::Todo, "   ")
        .execute(&ctx)
        .await
        .unwrap();
    assert!(rejected.is_null());
    assert_eq!(ctx.card_count().await, 4);

    let added = AddCard::new(ColumnId::Todo, "Write tests")
        .execute(&ctx)
        .await
        .unwrap();
    assert_eq!(added["column"], "todo");
    assert_eq!(ctx.card_count().await, 5);
    assert_invariants(&ctx.snapshot().await);
}
