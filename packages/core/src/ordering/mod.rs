//! Reorder Engine
//!
//! Maintains ordered lists of course content, converts drag gestures into
//! fully reindexed lists, and re-assigns explicit order indices.
//!
//! - [`reorder`] / [`reindex`] - pure single-element move and dense reindexing
//! - [`DragGesture`] - per-gesture state machine (Idle → Dragging → Idle)
//! - [`section_moves`] - section and subsection moves, including cross-section
//!
//! All functions borrow the input list and return a fresh list; observers of
//! the canonical list never see a partially reordered state.

mod drag;
mod reorder;
pub mod section_moves;

pub use drag::{DragGesture, DragState};
pub use reorder::{reindex, reorder, Ordered};
