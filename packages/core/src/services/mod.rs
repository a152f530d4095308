//! Host-Facing Services
//!
//! This module contains the coordinators the host view layer talks to:
//!
//! - `ContentEditor` - per-section editing session: block list + drag gesture
//! - `CourseCatalog` - canonical course snapshot + visible-subset computation
//!
//! Services hold snapshots and emit recomputed snapshots; persistence of an
//! emitted snapshot is entirely the host's responsibility.

pub mod catalog;
pub mod content;
pub mod error;

pub use catalog::CourseCatalog;
pub use content::ContentEditor;
pub use error::ContentError;
