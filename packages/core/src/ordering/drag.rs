//! Drag gesture state machine.
//!
//! One `DragGesture` tracks a single pointer- or keyboard-initiated gesture.
//! While `Dragging`, the view renders a floating preview of the active item
//! and the underlying list is untouched; the committed list changes only when
//! the gesture releases over a valid, distinct target.
//!
//! The UI event model is single threaded, so a second gesture cannot start
//! while one is active; [`DragGesture::start`] rejects the attempt anyway to
//! keep the invariant explicit.

use crate::ordering::{reorder, Ordered};

/// Gesture state. Resolution on release is instantaneous, so there are only
/// two observable states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No active gesture
    #[default]
    Idle,
    /// A gesture is active; `active_id` is the item under manipulation
    Dragging {
        /// Id of the item being dragged
        active_id: String,
    },
}

/// Per-gesture drag state machine
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    /// Create a gesture tracker in the `Idle` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no gesture is currently active
    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// Id of the item under manipulation, for rendering the drag overlay
    pub fn active_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { active_id } => Some(active_id),
        }
    }

    /// Begin a gesture on the item with `id`.
    ///
    /// Returns `false` (and leaves the current gesture untouched) if a
    /// gesture is already active.
    pub fn start(&mut self, id: impl Into<String>) -> bool {
        match &self.state {
            DragState::Idle => {
                self.state = DragState::Dragging {
                    active_id: id.into(),
                };
                true
            }
            DragState::Dragging { active_id } => {
                tracing::debug!(
                    active_id = %active_id,
                    "drag start ignored, a gesture is already active"
                );
                false
            }
        }
    }

    /// Resolve the gesture on release.
    ///
    /// `target_id = None` means the release point did not correspond to any
    /// item (released outside every valid target); the gesture ends with no
    /// change. A target equal to the active item is likewise a no-op. A
    /// distinct valid target yields the reordered, reindexed list.
    ///
    /// The gesture always returns to `Idle`, whatever the outcome.
    pub fn release<T: Ordered + Clone>(
        &mut self,
        list: &[T],
        target_id: Option<&str>,
    ) -> Option<Vec<T>> {
        let previous = std::mem::take(&mut self.state);
        let DragState::Dragging { active_id } = previous else {
            tracing::debug!("drag release without an active gesture");
            return None;
        };
        let target_id = target_id?;
        reorder(list, &active_id, target_id)
    }

    /// Cancel the gesture (escape key, pointer left the valid surface).
    ///
    /// Equivalent to releasing outside any valid target: back to `Idle`, no
    /// change emitted.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { active_id } = &self.state {
            tracing::debug!(active_id = %active_id, "drag gesture cancelled");
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockKind, ContentBlock};

    fn blocks(ids: &[&str]) -> Vec<ContentBlock> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| {
                let mut b = ContentBlock::new_with_id(*id, BlockKind::Text);
                b.order = i as i64;
                b
            })
            .collect()
    }

    fn id_sequence(list: &[ContentBlock]) -> Vec<&str> {
        list.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_full_gesture_reorders_on_release() {
        let list = blocks(&["a", "b", "c"]);
        let mut gesture = DragGesture::new();

        assert!(gesture.start("a"));
        assert_eq!(gesture.active_id(), Some("a"));

        let moved = gesture.release(&list, Some("c")).unwrap();
        assert_eq!(id_sequence(&moved), ["b", "c", "a"]);
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_release_outside_any_target_is_no_change() {
        let list = blocks(&["a", "b"]);
        let mut gesture = DragGesture::new();
        gesture.start("a");
        assert!(gesture.release(&list, None).is_none());
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_release_on_self_is_no_change() {
        let list = blocks(&["a", "b"]);
        let mut gesture = DragGesture::new();
        gesture.start("a");
        assert!(gesture.release(&list, Some("a")).is_none());
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_release_on_unknown_target_is_no_change() {
        let list = blocks(&["a", "b"]);
        let mut gesture = DragGesture::new();
        gesture.start("a");
        assert!(gesture.release(&list, Some("ghost")).is_none());
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut gesture = DragGesture::new();
        assert!(gesture.start("a"));
        assert!(!gesture.start("b"));
        // The original gesture is still the active one
        assert_eq!(gesture.active_id(), Some("a"));
    }

    #[test]
    fn test_cancel_returns_to_idle_without_change() {
        let mut gesture = DragGesture::new();
        gesture.start("a");
        gesture.cancel();
        assert!(gesture.is_idle());

        // A new gesture can start after cancel
        assert!(gesture.start("b"));
    }

    #[test]
    fn test_release_without_start_is_no_change() {
        let list = blocks(&["a", "b"]);
        let mut gesture = DragGesture::new();
        assert!(gesture.release(&list, Some("b")).is_none());
    }

    #[test]
    fn test_single_item_gesture_is_always_no_op() {
        let list = blocks(&["only"]);
        let mut gesture = DragGesture::new();
        gesture.start("only");
        assert!(gesture.release(&list, Some("only")).is_none());
    }
}
