//! Session snapshot: load and save the card sequence as JSON.
//!
//! A convenience so consecutive CLI invocations see the same board. Not a
//! durability mechanism; a missing or unreadable file just means a fresh
//! board with the default cards.

use anyhow::Result;
use std::path::Path;
use waypoint_board::board::InitBoard;
use waypoint_board::{BoardContext, Card, Execute};

/// Load a context from a snapshot file, falling back to the default board
pub async fn load(path: &Path) -> Result<BoardContext> {
    let ctx = BoardContext::new();

    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let cards: Vec<Card> = serde_json::from_str(&content)?;
            InitBoard::with_cards(cards).execute(&ctx).await?;
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "no snapshot, starting fresh");
            InitBoard::new().execute(&ctx).await?;
        }
    }

    Ok(ctx)
}

/// Write the current card sequence to the snapshot file
pub async fn save(path: &Path, ctx: &BoardContext) -> Result<()> {
    let content = serde_json::to_string_pretty(&ctx.snapshot().await)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}
