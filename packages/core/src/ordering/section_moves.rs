//! Section and subsection moves.
//!
//! The course editor reorders whole sections, reorders subsections within a
//! section, and moves a subsection into a different section (dropping it at a
//! position, or at the end when dropped on the section header). All moves are
//! pure: they borrow the input, return a fresh snapshot, and reindex every
//! list they disturb. Out-of-range indices and no-op moves return `None`.

use crate::models::{Section, Subsection};
use crate::ordering::reindex;

/// Move the section at `from_index` to `to_index`, reindexing the result.
///
/// Returns `None` if either index is out of range or the move is a no-op.
pub fn move_section(sections: &[Section], from_index: usize, to_index: usize) -> Option<Vec<Section>> {
    if from_index == to_index || from_index >= sections.len() || to_index >= sections.len() {
        return None;
    }
    let mut next = sections.to_vec();
    let moved = next.remove(from_index);
    next.insert(to_index, moved);
    Some(reindex(next))
}

/// Move a subsection within one section, returning the updated section.
///
/// Returns `None` if either index is out of range or the move is a no-op.
pub fn move_subsection(section: &Section, from_index: usize, to_index: usize) -> Option<Section> {
    let count = section.subsections.len();
    if from_index == to_index || from_index >= count || to_index >= count {
        return None;
    }
    let mut next = section.clone();
    let moved = next.subsections.remove(from_index);
    next.subsections.insert(to_index, moved);
    next.subsections = reindex(std::mem::take(&mut next.subsections));
    Some(next)
}

/// Move a subsection from one section into another.
///
/// `to_index` is clamped to the target's subsection count, so dropping on the
/// section header (index = len) appends. Both sections' subsection lists are
/// reindexed. Same-section moves delegate to [`move_subsection`].
///
/// Returns `None` when a section id is unknown or `from_index` is out of
/// range.
pub fn move_subsection_across(
    sections: &[Section],
    from_section_id: &str,
    from_index: usize,
    to_section_id: &str,
    to_index: usize,
) -> Option<Vec<Section>> {
    let from_pos = sections.iter().position(|s| s.id == from_section_id)?;

    if from_section_id == to_section_id {
        let updated = move_subsection(&sections[from_pos], from_index, to_index)?;
        let mut next = sections.to_vec();
        next[from_pos] = updated;
        return Some(next);
    }

    let to_pos = sections.iter().position(|s| s.id == to_section_id)?;
    if from_index >= sections[from_pos].subsections.len() {
        tracing::debug!(
            from_section_id,
            from_index,
            "subsection move index out of range, resolving as no-op"
        );
        return None;
    }

    let mut next = sections.to_vec();
    let moved: Subsection = next[from_pos].subsections.remove(from_index);

    let target = &mut next[to_pos];
    let insert_at = to_index.min(target.subsections.len());
    target.subsections.insert(insert_at, moved);

    next[from_pos].subsections = reindex(std::mem::take(&mut next[from_pos].subsections));
    next[to_pos].subsections = reindex(std::mem::take(&mut next[to_pos].subsections));
    Some(next)
}
