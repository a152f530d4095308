//! Course catalog snapshot.
//!
//! `CourseCatalog` holds the canonical course list for a view and answers
//! visibility queries through the filter engine. The canonical list is only
//! replaced wholesale (`set_courses`), never mutated by a query, so the host
//! can recompute the visible subset on every search-control change without
//! ordering surprises.

use crate::filtering::{filter_courses, CourseTypeFilter};
use crate::models::CourseSummary;

/// Canonical course list plus derived visibility queries
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: Vec<CourseSummary>,
}

impl CourseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canonical course list
    pub fn set_courses(&mut self, courses: Vec<CourseSummary>) {
        tracing::debug!(count = courses.len(), "course catalog replaced");
        self.courses = courses;
    }

    /// The canonical list, in canonical order
    pub fn courses(&self) -> &[CourseSummary] {
        &self.courses
    }

    /// Visible subset for the given search text and category filter
    pub fn visible(&self, search: &str, type_filter: CourseTypeFilter) -> Vec<CourseSummary> {
        filter_courses(&self.courses, search, type_filter)
    }

    /// Visible subset with a raw (possibly stale) filter control value.
    ///
    /// Unknown values fail open to [`CourseTypeFilter::All`].
    pub fn visible_raw(&self, search: &str, raw_filter: &str) -> Vec<CourseSummary> {
        self.visible(search, CourseTypeFilter::parse(raw_filter))
    }
}
