//! Course list filtering.
//!
//! Pure function of the canonical course list, a free-text query, and a
//! category selector. Category narrows the candidate set, search narrows
//! within it; the output preserves the canonical list's relative order.
//!
//! Matching is case-insensitive, accent-sensitive substring: `"MATH"` and
//! `"math"` match the same courses, but no locale folding is applied.

use crate::models::{CourseSummary, CourseType};

/// Category selector for course filtering.
///
/// Raw control values enter through [`CourseTypeFilter::parse`], which
/// accepts the original Polish strings and the English names and fails open
/// to `All` on anything else, so a stale stored value can never blank the
/// course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseTypeFilter {
    #[default]
    All,
    Mandatory,
    Elective,
}

impl CourseTypeFilter {
    /// Parse a raw control value, failing open to `All` on anything unknown.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "wszystkie" | "all" => Self::All,
            "obowiązkowy" | "mandatory" => Self::Mandatory,
            "fakultatywny" | "elective" => Self::Elective,
            other => {
                tracing::warn!("Unknown course type filter '{}', treating as all", other);
                Self::All
            }
        }
    }

    /// Whether a course of the given effective type passes this filter
    pub fn matches(self, course_type: CourseType) -> bool {
        match self {
            Self::All => true,
            Self::Mandatory => course_type == CourseType::Mandatory,
            Self::Elective => course_type == CourseType::Elective,
        }
    }
}

/// Compute the visible subset of `courses` for the given search text and
/// category filter.
///
/// - Category: courses pass when their [effective type] matches; `All` passes
///   everything.
/// - Search: blank/whitespace passes everything; otherwise the lowercased
///   query must be a substring of the title, description, subject, or the
///   decimal form of the year of study. Absent fields are empty strings and
///   simply fail to match.
///
/// The result is a stable filter: relative order of the input is preserved.
///
/// [effective type]: CourseSummary::effective_course_type
pub fn filter_courses(
    courses: &[CourseSummary],
    search: &str,
    type_filter: CourseTypeFilter,
) -> Vec<CourseSummary> {
    let by_type: Vec<&CourseSummary> = courses
        .iter()
        .filter(|course| type_filter.matches(course.effective_course_type()))
        .collect();

    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        tracing::debug!(
            total = courses.len(),
            visible = by_type.len(),
            ?type_filter,
            "course filter applied without search"
        );
        return by_type.into_iter().cloned().collect();
    }

    let visible: Vec<CourseSummary> = by_type
        .into_iter()
        .filter(|course| matches_search(course, &needle))
        .cloned()
        .collect();
    tracing::debug!(
        total = courses.len(),
        visible = visible.len(),
        ?type_filter,
        search = %needle,
        "course filter applied"
    );
    visible
}

/// Case-insensitive substring match over the searchable fields.
///
/// `needle` must already be trimmed and lowercased.
fn matches_search(course: &CourseSummary, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
        || course.subject.to_lowercase().contains(needle)
        || course.year_of_study.to_string().contains(needle)
}

#[cfg(test)]
#[path = "course_filter_test.rs"]
mod course_filter_test;
