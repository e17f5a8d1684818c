//! Drag gesture commands
//!
//! A gesture is `Idle -> Dragging -> Idle`. Exactly one drag can be active
//! at a time; every transition here is synchronous with respect to the card
//! sequence, so operations are naturally serialized.

mod begin;
mod cancel;
mod drop;
mod leave;
mod over;

pub use begin::BeginDrag;
pub use cancel::CancelDrag;
pub use drop::CompleteDrop;
pub use leave::DragLeave;
pub use over::DragOver;
