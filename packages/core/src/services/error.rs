//! Service Layer Error Types
//!
//! Errors here indicate caller contract violations (unknown block id, a
//! second gesture while one is active, invalid block payloads). Data-shape
//! problems in course records never surface as errors; the engines degrade to
//! identity behavior instead.

use crate::models::BlockValidationError;
use thiserror::Error;

/// Content editing errors
#[derive(Error, Debug)]
pub enum ContentError {
    /// No block with this id in the editing session
    #[error("Content block not found: {id}")]
    BlockNotFound { id: String },

    /// A drag gesture is already in progress
    #[error("A drag gesture is already active for block '{active_id}'")]
    GestureAlreadyActive { active_id: String },

    /// Block payload failed validation
    #[error("Block validation failed: {0}")]
    ValidationFailed(#[from] BlockValidationError),
}

impl ContentError {
    /// Create a block not found error
    pub fn block_not_found(id: impl Into<String>) -> Self {
        Self::BlockNotFound { id: id.into() }
    }

    /// Create a gesture already active error
    pub fn gesture_already_active(active_id: impl Into<String>) -> Self {
        Self::GestureAlreadyActive {
            active_id: active_id.into(),
        }
    }
}
