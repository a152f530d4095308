//! CourseSpace Core Content Logic Layer
//!
//! This crate provides the client-side content ordering and filtering core
//! for the CourseSpace e-learning platform.
//!
//! # Architecture
//!
//! - **Borrowed-immutable snapshots**: engines accept a snapshot of the host's
//!   canonical list and return a recomputed list; they never mutate the input
//! - **Dense ordering**: after every move, `order` fields form a 0..n-1 permutation
//! - **Synchronous**: all operations run to completion inside UI event handlers;
//!   there is no background work and no I/O in this crate
//! - **Fail open**: data-shape problems (unknown filter values, malformed course
//!   records) degrade to identity behavior instead of erroring
//!
//! # Modules
//!
//! - [`models`] - Data structures (ContentBlock, CourseSummary, Section)
//! - [`ordering`] - Reorder engine: drag gesture state machine and list moves
//! - [`filtering`] - Filter engine: course search and category filtering
//! - [`services`] - Host-facing coordinators (ContentEditor, CourseCatalog)

pub mod filtering;
pub mod models;
pub mod ordering;
pub mod services;

// Re-export commonly used types
pub use filtering::*;
pub use models::*;
pub use ordering::*;
pub use services::*;
