//! Content Block Data Structures
//!
//! This module defines the `ContentBlock` struct: one unit of course material
//! (text, file, video, quiz, or math content) with an explicit display order.
//!
//! # Ordering invariant
//!
//! Within a list, `order` values are a permutation of `0..n-1` after every
//! reorder operation: no gaps, no duplicates. The ordering engine owns
//! recomputing `order`; callers must not assign it directly.
//!
//! # Examples
//!
//! ```rust
//! use coursespace_core::models::{BlockKind, ContentBlock};
//!
//! let block = ContentBlock::new(BlockKind::Text)
//!     .with_title("Introduction")
//!     .with_content("Welcome to the course.");
//!
//! assert_eq!(block.kind, BlockKind::Text);
//! assert!(block.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for ContentBlock operations
#[derive(Error, Debug)]
pub enum BlockValidationError {
    #[error("Block of kind '{kind}' is missing required field: {field}")]
    MissingPayload { kind: String, field: String },

    #[error("Invalid block ID: {0}")]
    InvalidId(String),
}

/// Closed set of content block kinds
///
/// Wire form matches the original course documents (`"text"`, `"file"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    File,
    Video,
    Quiz,
    Math,
}

impl BlockKind {
    /// Wire name of this kind, as stored in course documents
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Video => "video",
            Self::Quiz => "quiz",
            Self::Math => "math",
        }
    }
}

/// Source of a video block's media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Upload,
    Youtube,
}

/// One unit of course material with an explicit display position.
///
/// # Fields
///
/// - `id`: opaque stable identifier, unique within its parent list
/// - `kind`: closed content tag (wire field `type`)
/// - `order`: zero-based dense display index, owned by the ordering engine
/// - kind-specific payload fields, opaque to the ordering engine
///
/// Payload fields are explicit optionals rather than a dynamic bag, with the
/// field required by each kind checked in [`ContentBlock::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Unique identifier (UUID when generated by this crate)
    pub id: String,

    /// Content kind tag (wire field `type`)
    #[serde(rename = "type")]
    pub kind: BlockKind,

    /// Zero-based dense display index
    #[serde(default)]
    pub order: i64,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Text body (text blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Stored file reference (file blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    /// Uploaded video reference (video blocks with `VideoSource::Upload`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// YouTube reference (video blocks with `VideoSource::Youtube`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,

    /// Which of the two video references applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_source: Option<VideoSource>,

    /// Referenced quiz id (quiz blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,

    /// Math expression source (math blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_content: Option<String>,

    /// Size in bytes of the stored file, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl ContentBlock {
    /// Create a new block of the given kind with an auto-generated UUID.
    ///
    /// The block starts with `order = 0`; the ordering engine assigns the real
    /// position when the block joins a list.
    pub fn new(kind: BlockKind) -> Self {
        Self::new_with_id(Uuid::new_v4().to_string(), kind)
    }

    /// Create a new block with an explicit id (e.g. when rehydrating from storage)
    pub fn new_with_id(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
            order: 0,
            title: None,
            content: None,
            file_url: None,
            video_url: None,
            youtube_url: None,
            video_source: None,
            quiz_id: None,
            math_content: None,
            file_size: None,
        }
    }

    /// Set the display title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the text body
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the referenced quiz id
    #[must_use]
    pub fn with_quiz_id(mut self, quiz_id: impl Into<String>) -> Self {
        self.quiz_id = Some(quiz_id.into());
        self
    }

    /// Check that the payload field required by this block's kind is present.
    ///
    /// # Errors
    ///
    /// Returns [`BlockValidationError::MissingPayload`] naming the absent field,
    /// or [`BlockValidationError::InvalidId`] for an empty id.
    pub fn validate(&self) -> Result<(), BlockValidationError> {
        if self.id.trim().is_empty() {
            return Err(BlockValidationError::InvalidId(
                "id must not be empty".to_string(),
            ));
        }

        let missing = |field: &str| BlockValidationError::MissingPayload {
            kind: self.kind.as_str().to_string(),
            field: field.to_string(),
        };

        match self.kind {
            BlockKind::Text => {
                if self.content.as_deref().is_none_or(str::is_empty) {
                    return Err(missing("content"));
                }
            }
            BlockKind::File => {
                if self.file_url.as_deref().is_none_or(str::is_empty) {
                    return Err(missing("fileUrl"));
                }
            }
            BlockKind::Video => {
                let has_upload = self.video_url.as_deref().is_some_and(|u| !u.is_empty());
                let has_youtube = self.youtube_url.as_deref().is_some_and(|u| !u.is_empty());
                if !has_upload && !has_youtube {
                    return Err(missing("videoUrl or youtubeUrl"));
                }
            }
            BlockKind::Quiz => {
                if self.quiz_id.as_deref().is_none_or(str::is_empty) {
                    return Err(missing("quizId"));
                }
            }
            BlockKind::Math => {
                if self.math_content.as_deref().is_none_or(str::is_empty) {
                    return Err(missing("mathContent"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;
