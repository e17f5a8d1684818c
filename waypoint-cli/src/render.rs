//! Text rendering of the board, standing in for the DOM render collaborator.
//!
//! Cards are laid out at a fixed row height per column. After every render
//! the drop-slot layout is re-registered on the context so drag gestures
//! resolve against exactly what was last shown.

use anyhow::Result;
use waypoint_board::board::GetBoard;
use waypoint_board::{BoardContext, ColumnId, DropSlot, Execute};

/// Height of one card row in layout units
pub const ROW_HEIGHT: f32 = 60.0;

/// Register each column's drop slots: one before every card, plus the
/// trailing end-of-column slot.
pub async fn register_layouts(ctx: &BoardContext) {
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

/// Print the board grouped by column
pub async fn print_board(ctx: &BoardContext) -> Result<()> {
    let view = GetBoard::new().execute(ctx).await?;

    for column in view["columns"].as_array().into_iter().flatten() {
        let cards = column["cards"].as_array().cloned().unwrap_or_default();
        println!(
            "{} ({})",
            column["title"].as_str().unwrap_or_default(),
            cards.len()
        );
        for card in &cards {
            println!(
                "  [{}] {}",
                card["id"].as_str().unwrap_or_default(),
                card["title"].as_str().unwrap_or_default()
            );
        }
        println!();
    }

    register_layouts(ctx).await;
    Ok(())
}
