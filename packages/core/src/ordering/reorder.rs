//! Pure single-element list moves with dense reindexing.
//!
//! The move semantics are "splice out, then splice in at the target's prior
//! position": remove the source element, insert it at the target index
//! computed against the pre-removal list, then assign `order = index` in one
//! O(n) pass. No other item's relative order changes except the shift induced
//! by removal and insertion.

use crate::models::{ContentBlock, Section, Subsection};

/// Seam trait for anything the reorder engine can move.
///
/// Implementors expose a stable id for target resolution and let the engine
/// re-assign the display order after a move.
pub trait Ordered {
    /// Stable identifier, unique within the list being reordered
    fn id(&self) -> &str;

    /// Current display order
    fn order(&self) -> i64;

    /// Assign a new display order. Only the ordering engine calls this.
    fn set_order(&mut self, order: i64);
}

impl Ordered for ContentBlock {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i64 {
        self.order
    }
    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

impl Ordered for Section {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i64 {
        self.order
    }
    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

impl Ordered for Subsection {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i64 {
        self.order
    }
    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

/// Assign `order = index` for every item, in list order.
///
/// Every mutation that disturbs a list's order runs through this, restoring
/// the invariant that `order` values are a dense `0..n-1` permutation.
pub fn reindex<T: Ordered>(mut list: Vec<T>) -> Vec<T> {
    for (index, item) in list.iter_mut().enumerate() {
        item.set_order(index as i64);
    }
    list
}

/// Move the item with `source_id` to the position of the item with
/// `target_id`, returning the reindexed list.
///
/// Indices are resolved by locating the ids in the current list order, never
/// taken from the caller, so stale caller indices cannot corrupt the move.
///
/// Returns `None` when the gesture resolves to no change: source and target
/// are the same item, or either id is not present in the list. Callers that
/// persist on reorder should treat `None` as "nothing to write".
pub fn reorder<T: Ordered + Clone>(list: &[T], source_id: &str, target_id: &str) -> Option<Vec<T>> {
    if source_id == target_id {
        return None;
    }

    let from = list.iter().position(|item| item.id() == source_id);
    let to = list.iter().position(|item| item.id() == target_id);
    let (Some(from), Some(to)) = (from, to) else {
        tracing::debug!(
            source_id,
            target_id,
            "reorder target not found in list, resolving as no-op"
        );
        return None;
    };

    let mut next: Vec<T> = list.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(reindex(next))
}
