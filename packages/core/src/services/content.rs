//! Per-section content editing session.
//!
//! `ContentEditor` pairs a working snapshot of one section's block list with a
//! [`DragGesture`]. The host forwards UI events (`begin_drag`, `drop_on`,
//! `cancel_drag`) and receives the recomputed snapshot whenever the committed
//! list actually changed; writing that snapshot to durable storage is the
//! host's job, and the editor renders the optimistic new order without
//! waiting for the write.

use crate::models::ContentBlock;
use crate::ordering::{reindex, DragGesture};
use crate::services::error::ContentError;

/// Editing session for one section's content blocks
#[derive(Debug, Default)]
pub struct ContentEditor {
    blocks: Vec<ContentBlock>,
    gesture: DragGesture,
}

impl ContentEditor {
    /// Create a session from a stored block list.
    ///
    /// Blocks are normalized on entry: sorted by their stored `order` (stable,
    /// so legacy documents without explicit orders keep their stored sequence)
    /// and reindexed to the dense form.
    pub fn new(mut blocks: Vec<ContentBlock>) -> Self {
        blocks.sort_by_key(|block| block.order);
        Self {
            blocks: reindex(blocks),
            gesture: DragGesture::new(),
        }
    }

    /// Current committed block list, in display order
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Id of the block being dragged, for the floating preview
    pub fn dragging(&self) -> Option<&str> {
        self.gesture.active_id()
    }

    /// Begin dragging the block with `id`.
    ///
    /// # Errors
    ///
    /// - [`ContentError::BlockNotFound`] if the id is not in this session
    /// - [`ContentError::GestureAlreadyActive`] if a gesture is in progress
    pub fn begin_drag(&mut self, id: &str) -> Result<(), ContentError> {
        if !self.blocks.iter().any(|block| block.id == id) {
            return Err(ContentError::block_not_found(id));
        }
        if let Some(active) = self.gesture.active_id() {
            return Err(ContentError::gesture_already_active(active));
        }
        self.gesture.start(id);
        Ok(())
    }

    /// Resolve the active gesture on the given drop target.
    ///
    /// `target_id = None` means the release landed outside every valid
    /// target. Returns the new committed snapshot when the list changed,
    /// `None` when the gesture resolved as a no-op; the host persists only
    /// on `Some`.
    pub fn drop_on(&mut self, target_id: Option<&str>) -> Option<Vec<ContentBlock>> {
        let next = self.gesture.release(&self.blocks, target_id)?;
        self.blocks = next.clone();
        Some(next)
    }

    /// Cancel the active gesture with no change to the committed list
    pub fn cancel_drag(&mut self) {
        self.gesture.cancel();
    }

    /// Append a validated block and return the new snapshot.
    ///
    /// # Errors
    ///
    /// [`ContentError::ValidationFailed`] when the block's payload is invalid.
    pub fn add_block(&mut self, block: ContentBlock) -> Result<Vec<ContentBlock>, ContentError> {
        block.validate()?;
        self.blocks.push(block);
        self.blocks = reindex(std::mem::take(&mut self.blocks));
        Ok(self.blocks.clone())
    }

    /// Remove the block with `id` and return the new snapshot.
    ///
    /// # Errors
    ///
    /// [`ContentError::BlockNotFound`] if the id is not in this session.
    pub fn remove_block(&mut self, id: &str) -> Result<Vec<ContentBlock>, ContentError> {
        let position = self
            .blocks
            .iter()
            .position(|block| block.id == id)
            .ok_or_else(|| ContentError::block_not_found(id))?;
        self.blocks.remove(position);
        self.blocks = reindex(std::mem::take(&mut self.blocks));
        Ok(self.blocks.clone())
    }
}
