//! Data Models
//!
//! This module contains the core data structures used throughout CourseSpace:
//!
//! - `ContentBlock` - one unit of course material with an explicit display order
//! - `CourseSummary` - lightweight course record for list/search display
//! - `Section` / `Subsection` - the section hierarchy a course is organized into
//!
//! All entities are owned by the host view; the ordering and filtering engines
//! only accept snapshots and return recomputed snapshots or subsets.

mod block;
mod course;
mod section;

pub use block::{BlockKind, BlockValidationError, ContentBlock, VideoSource};
pub use course::{CourseSummary, CourseType};
pub use section::{Section, Subsection};
