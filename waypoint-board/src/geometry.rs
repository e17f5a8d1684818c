//! Pointer-geometry resolution for drop slots.
//!
//! Pure functions over rendered slot positions, so nearest-slot behavior is
//! unit-testable without any rendering engine.

use crate::types::DropSlot;

/// Downward bias applied to every slot before comparing against the pointer.
/// A slot only qualifies once the pointer sits above `top + DISTANCE_OFFSET`,
/// which makes the gesture favor the gap just below the pointer.
pub const DISTANCE_OFFSET: f32 = 50.0;

/// Resolve the pointer position to the nearest qualifying slot.
///
/// Among slots whose biased top (`top + DISTANCE_OFFSET`) lies below the
/// pointer (`pointer_y - (top + DISTANCE_OFFSET) < 0`), picks the one whose
/// offset is closest to zero. If none qualifies, falls back to the last slot
/// in the list, which by convention is the end-of-column slot. Returns the
/// index into `slots`, or `None` when `slots` is empty.
pub fn nearest_slot(pointer_y: f32, slots: &[DropSlot]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (idx, slot) in slots.iter().enumerate() {
        let offset = pointer_y - (slot.top + DISTANCE_OFFSET);
        if offset < 0.0 && best.map_or(true, |(_, b)| offset > b) {
            best = Some((idx, offset));
        }
    }

    best.map(|(idx, _)| idx)
        .or_else(|| slots.len().checked_sub(1))
}
