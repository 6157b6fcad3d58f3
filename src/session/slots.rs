use std::collections::BTreeMap;

use crate::foundation::error::{FramepressError, FramepressResult};

#[derive(Clone, Debug)]
/// Photo-to-slot assignment bookkeeping for one visitor session.
///
/// Tracks which photo handle fills which slot of a chosen frame. Each slot holds at most one
/// photo; assigning again replaces the previous occupant. The finalize step consumes the
/// assignment via [`SlotAssignments::into_ordered`], which yields photos in slot order, the
/// ordering contract the compositor relies on.
pub struct SlotAssignments<P> {
    slot_count: usize,
    by_slot: BTreeMap<usize, P>,
}

impl<P> SlotAssignments<P> {
    /// Create an empty assignment for a frame with `slot_count` slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            by_slot: BTreeMap::new(),
        }
    }

    /// Number of slots in the chosen frame.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Assign `photo` to `slot`, returning the photo it replaced, if any.
    pub fn assign(&mut self, slot: usize, photo: P) -> FramepressResult<Option<P>> {
        if slot >= self.slot_count {
            return Err(FramepressError::layout(format!(
                "slot index {slot} out of range for {} slots",
                self.slot_count
            )));
        }
        Ok(self.by_slot.insert(slot, photo))
    }

    /// Remove and return the photo assigned to `slot`, if any.
    pub fn clear(&mut self, slot: usize) -> Option<P> {
        self.by_slot.remove(&slot)
    }

    /// Photo currently assigned to `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&P> {
        self.by_slot.get(&slot)
    }

    /// Number of slots currently filled.
    pub fn filled_count(&self) -> usize {
        self.by_slot.len()
    }

    /// Whether every slot has a photo.
    pub fn is_complete(&self) -> bool {
        self.filled_count() == self.slot_count
    }

    /// Consume the assignment and return photos in slot order.
    ///
    /// Refuses incomplete assignments so a finalize render never silently drops a slot.
    pub fn into_ordered(self) -> FramepressResult<Vec<P>> {
        if !self.is_complete() {
            return Err(FramepressError::layout(format!(
                "assignment incomplete: need {} photos, have {}",
                self.slot_count,
                self.by_slot.len()
            )));
        }
        Ok(self.by_slot.into_values().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/slots.rs"]
mod tests;
