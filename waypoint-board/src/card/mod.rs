//! Card commands

mod add;
mod delete;
mod list;

pub use add::AddCard;
pub use delete::{DeleteCard, DELETE_DELAY_MS};
pub use list::ListCards;
