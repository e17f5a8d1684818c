//! CLI command handlers bridging arguments to board operations.

use crate::render;
use anyhow::Result;
use std::time::Duration;
use waypoint_board::board::InitBoard;
use waypoint_board::card::{AddCard, DeleteCard, DELETE_DELAY_MS};
use waypoint_board::gesture::{BeginDrag, CompleteDrop, DragOver};
use waypoint_board::{BoardContext, ColumnId, Execute};

/// Print the current board
pub async fn show(ctx: &BoardContext) -> Result<()> {
    render::print_board(ctx).await
}

/// Add a card to the end of a column
pub async fn add(ctx: &BoardContext, column: &str, title: &str) -> Result<()> {
    let column: ColumnId = column.parse()?;

    let result = AddCard::new(column, title).execute(ctx).await?;
    if result.is_null() {
        println!("Nothing added: the title is empty.");
        return Ok(());
    }

    println!("Added {} to {}.", result["id"], column);
    render::print_board(ctx).await
}

/// Simulate a full drag gesture: begin, hover, drop.
///
/// The text renderer lays card rows out at a fixed height, so a pointer
/// height of `row * 60` targets the gap before that row; omitting the
/// height drops at the end of the column.
pub async fn drag(ctx: &BoardContext, card: &str, column: &str, y: Option<f32>) -> Result<()> {
    let column: ColumnId = column.parse()?;
    let pointer_y = y.unwrap_or(f32::MAX);

    render::register_layouts(ctx).await;
    BeginDrag::new(card).execute(ctx).await?;
    DragOver::new(column, pointer_y).execute(ctx).await?;
    let result = CompleteDrop::new(column, pointer_y).execute(ctx).await?;

    if result.is_null() {
        println!("Nothing moved.");
    } else {
        println!("Moved {} to {}.", result["id"], column);
    }
    render::print_board(ctx).await
}

/// Drop a card on the delete zone and wait out the removal delay
pub async fn delete(ctx: &BoardContext, card: &str) -> Result<()> {
    DeleteCard::new(card).execute(ctx).await?;
    println!("Deleting...");

    // The engine removes the card once the animation delay elapses; hold
    // the process open until then so the snapshot reflects the removal.
    tokio::time::sleep(Duration::from_millis(DELETE_DELAY_MS + 50)).await;

    render::print_board(ctx).await
}

/// Reset the board to the default card set
pub async fn reset(ctx: &BoardContext) -> Result<()> {
    InitBoard::new().execute(ctx).await?;
    println!("Board reset.");
    render::print_board(ctx).await
}
