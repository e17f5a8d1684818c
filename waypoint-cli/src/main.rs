mod commands;
mod render;
mod snapshot;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "waypoint", version, about = "Plan your journey: a kanban workflow board")]
struct Cli {
    /// Session snapshot file (convenience only, no durability guarantee)
    #[arg(long, global = true, default_value = ".waypoint.json")]
    board: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the board
    Show,
    /// Add a card to the end of a column
    Add {
        /// Destination column (backlog, todo, doing, done)
        column: String,
        /// Card title
        title: String,
    },
    /// Drag a card and drop it on a column
    Drag {
        /// Card id to drag
        card: String,
        /// Destination column (backlog, todo, doing, done)
        column: String,
        /// Pointer height at release; each card row is 60 units tall.
        /// Omit to drop at the end of the column.
        #[arg(long)]
        y: Option<f32>,
    },
    /// Drop a card on the delete zone
    Delete {
        /// Card id to delete
        card: String,
    },
    /// Reset the board to the default card set
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = snapshot::load(&cli.board).await?;

    match &cli.command {
        Command::Show => commands::show(&ctx).await?,
        Command::Add { column, title } => commands::add(&ctx, column, title).await?,
        Command::Drag { card, column, y } => commands::drag(&ctx, card, column, *y).await?,
        Command::Delete { card } => commands::delete(&ctx, card).await?,
        Command::Reset => commands::reset(&ctx).await?,
    }

    snapshot::save(&cli.board, &ctx).await?;
    Ok(())
}
