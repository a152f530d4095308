//! Filter Engine
//!
//! Computes the visible subset of a course list from two independent
//! predicates: a category filter and a free-text search. Both are commutative
//! set intersections; the category predicate runs first only so the narrowing
//! diagnostics read naturally.

mod course_filter;

pub use course_filter::{filter_courses, CourseTypeFilter};
