//! Course Summary Data Structures
//!
//! Defines `CourseSummary`, the lightweight course record the filter engine
//! consumes, and the `CourseType` category used for mandatory/elective
//! filtering.
//!
//! # Lenient deserialization
//!
//! Course documents in the wild are loosely shaped: display fields may be
//! absent, `courseType` may be missing (courses created before the field
//! existed) or carry a stale unknown value, and documents accumulate extra
//! fields this crate does not model. All of these deserialize without error:
//! absent display fields become empty strings, unknown `courseType` values
//! become unset (logged at warn), and unmodeled fields are preserved in
//! [`CourseSummary::extra`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Course category: the two types used for filtering.
///
/// Wire strings are the original Polish document values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    #[serde(rename = "obowiązkowy")]
    Mandatory,
    #[serde(rename = "fakultatywny")]
    Elective,
}

/// Lenient `courseType` deserializer: unknown values map to unset rather than
/// failing the whole document.
fn deserialize_course_type<'de, D>(deserializer: D) -> Result<Option<CourseType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|value| match value {
        "obowiązkowy" | "mandatory" => Some(CourseType::Mandatory),
        "fakultatywny" | "elective" => Some(CourseType::Elective),
        other => {
            tracing::warn!("Unknown courseType value '{}', treating as unset", other);
            None
        }
    }))
}

/// Lightweight record describing one course for list/search display.
///
/// # Fields
///
/// - `id`, `title`, `description`, `subject`: display/search fields; absent
///   values deserialize to empty strings and simply fail to match searches
/// - `year_of_study`: searched by its decimal string form
/// - `course_type`: optional category; use [`effective_course_type`] for the
///   missing-value policy instead of reading the field directly
///
/// [`effective_course_type`]: CourseSummary::effective_course_type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub subject: String,

    /// Year of study (wire name `year_of_study`, as in the original documents)
    #[serde(default)]
    pub year_of_study: i64,

    /// Course category; `None` for documents predating the field
    #[serde(
        default,
        rename = "courseType",
        deserialize_with = "deserialize_course_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub course_type: Option<CourseType>,

    /// Creation timestamp, when the document carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp, when the document carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Unmodeled document fields, carried through round-trips untouched
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CourseSummary {
    /// Effective category of this course.
    ///
    /// Courses created before the `courseType` field existed are treated as
    /// mandatory. This accessor is the single place that policy lives; callers
    /// must not read `course_type` with an ad hoc fallback.
    pub fn effective_course_type(&self) -> CourseType {
        self.course_type.unwrap_or(CourseType::Mandatory)
    }
}
