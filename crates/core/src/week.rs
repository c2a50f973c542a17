//! Per-week slot selection.

use crate::models::slot::CourseSlot;

/// Selects the slots belonging to `week` that are not cancelled.
///
/// Pure and total: it clones the matching slots into a fresh collection and
/// never mutates its input, so callers can re-derive on every week change.
/// Slots whose shape carries no week information (`week == None`) never
/// match; only editor-shape collections are meaningful inputs here.
pub fn select_week(slots: &[CourseSlot], week: u32) -> Vec<CourseSlot> {
    slots
        .iter()
        .filter(|slot| slot.week == Some(week) && slot.cancelled != Some(true))
        .cloned()
        .collect()
}
