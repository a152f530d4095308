//! Section Hierarchy Data Structures
//!
//! A course is organized into sections, each holding ordered subsections of
//! materials. Both levels participate in the same dense-order invariant as
//! content blocks and are moved through the functions in
//! [`crate::ordering::section_moves`].

use serde::{Deserialize, Serialize};

/// One course section: a named, ordered container of subsections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Opaque stable identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Zero-based dense display index among sibling sections
    #[serde(default)]
    pub order: i64,

    /// Ordered subsections of this section
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

/// One subsection: a named, ordered unit of materials inside a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    /// Opaque stable identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Optional description shown in the editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Zero-based dense display index within the parent section
    #[serde(default)]
    pub order: i64,

    /// Number of materials attached (payload itself is out of scope here)
    #[serde(default)]
    pub materials_count: usize,
}

impl Section {
    /// Create an empty section
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            order: 0,
            subsections: Vec::new(),
        }
    }
}

impl Subsection {
    /// Create an empty subsection
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            order: 0,
            materials_count: 0,
        }
    }
}
