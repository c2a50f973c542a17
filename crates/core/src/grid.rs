//! Geometry of the weekly grid.
//!
//! The grid shows six equal day columns (Lundi through Samedi) and thirteen
//! hourly rows from 07:00 to 19:00 inclusive start hours. One hour of
//! vertical extent maps to [`HOUR_UNIT`] pixels; the horizontal axis is
//! expressed in percent of the grid width.

use chrono::{NaiveTime, Timelike};

use crate::models::slot::CourseSlot;

/// Vertical pixels per hour.
pub const HOUR_UNIT: f64 = 64.0;
/// First hour shown on the grid.
pub const GRID_START_HOUR: u32 = 7;
/// First hour past the end of the grid.
pub const GRID_END_HOUR: u32 = 20;
/// Number of day columns (Lundi..Samedi).
pub const DAY_COLUMNS: usize = 6;
/// Number of hourly rows (07:00..=19:00 start hours).
pub const HOUR_ROWS: usize = 13;

/// Absolute position of one slot on the grid. `top`/`height` in pixels,
/// `left`/`width` in percent of the grid width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPosition {
    pub top: f64,
    pub height: f64,
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Signed minutes between the grid origin (07:00) and `t`. Negative for
/// times before the origin.
pub fn minutes_from_grid_start(t: NaiveTime) -> i64 {
    (t.hour() as i64 - GRID_START_HOUR as i64) * 60 + t.minute() as i64
}

/// Signed duration in minutes from `start` to `end`.
pub fn duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    (end.hour() as i64 - start.hour() as i64) * 60 + (end.minute() as i64 - start.minute() as i64)
}

/// Maps a day column and time range to an absolute grid position.
///
/// Times outside the displayed range are not clipped: a slot starting before
/// 07:00 yields a negative `top`, one ending after 20:00 extends past the
/// visible rows. Keeping slots in range is the data producer's job.
/// Simultaneous slots on the same day are not stacked side by side; they
/// overlap visually.
pub fn position(day_index: usize, start: NaiveTime, end: NaiveTime) -> SlotPosition {
    let column_pct = 100.0 / DAY_COLUMNS as f64;

    SlotPosition {
        top: minutes_from_grid_start(start) as f64 / 60.0 * HOUR_UNIT,
        height: duration_minutes(start, end) as f64 / 60.0 * HOUR_UNIT,
        left_pct: day_index as f64 * column_pct,
        width_pct: column_pct,
    }
}

/// Convenience wrapper deriving the day column from the slot itself.
pub fn position_slot(slot: &CourseSlot) -> SlotPosition {
    position(slot.day.column_index(), slot.start, slot.end)
}

/// Start hours of the grid rows, for rendering the hour gutter.
pub fn hour_rows() -> impl Iterator<Item = u32> {
    GRID_START_HOUR..GRID_END_HOUR
}
