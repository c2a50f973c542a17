use chrono::NaiveTime;
use edt_core::grid::{
    duration_minutes, hour_rows, minutes_from_grid_start, position, DAY_COLUMNS, GRID_START_HOUR,
    HOUR_ROWS, HOUR_UNIT,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_grid_constants() {
    assert_eq!(HOUR_UNIT, 64.0);
    assert_eq!(GRID_START_HOUR, 7);
    assert_eq!(DAY_COLUMNS, 6);
    assert_eq!(HOUR_ROWS, 13);
    assert_eq!(hour_rows().count(), HOUR_ROWS);
    assert_eq!(hour_rows().next(), Some(7));
    assert_eq!(hour_rows().last(), Some(19));
}

#[test]
fn test_position_monday_morning() {
    // 08:00-10:00 on the first column: one hour below the origin, two tall.
    let pos = position(0, time(8, 0), time(10, 0));

    assert_eq!(pos.top, HOUR_UNIT);
    assert_eq!(pos.height, 2.0 * HOUR_UNIT);
    assert_eq!(pos.left_pct, 0.0);
    assert_eq!(pos.width_pct, 100.0 / 6.0);
}

#[rstest]
#[case(time(7, 0), time(8, 0), 0.0, 64.0)]
#[case(time(7, 30), time(9, 30), 32.0, 128.0)]
#[case(time(10, 15), time(11, 0), 208.0, 48.0)]
#[case(time(19, 0), time(20, 0), 768.0, 64.0)]
fn test_position_top_and_height(
    #[case] start: NaiveTime,
    #[case] end: NaiveTime,
    #[case] expected_top: f64,
    #[case] expected_height: f64,
) {
    let pos = position(0, start, end);
    assert_eq!(pos.top, expected_top);
    assert_eq!(pos.height, expected_height);
}

#[rstest]
#[case(0, 0.0)]
#[case(1, 100.0 / 6.0)]
#[case(3, 50.0)]
#[case(5, 500.0 / 6.0)]
fn test_position_columns(#[case] day_index: usize, #[case] expected_left: f64) {
    let pos = position(day_index, time(8, 0), time(9, 0));
    assert_eq!(pos.left_pct, expected_left);
    assert_eq!(pos.width_pct, 100.0 / 6.0);
}

#[test]
fn test_height_is_positive_for_ordered_times() {
    // For any start < end the height is strictly positive and proportional
    // to the duration in minutes.
    for (start, end) in [
        (time(7, 0), time(7, 15)),
        (time(9, 45), time(12, 0)),
        (time(13, 0), time(19, 59)),
    ] {
        let pos = position(2, start, end);
        let minutes = duration_minutes(start, end);
        assert!(minutes > 0);
        assert!(pos.height > 0.0);
        assert_eq!(pos.height, minutes as f64 / 60.0 * HOUR_UNIT);
    }
}

#[test]
fn test_out_of_range_times_are_not_clipped() {
    // A slot starting before 07:00 lands above the visible grid.
    let early = position(0, time(6, 0), time(7, 30));
    assert_eq!(early.top, -HOUR_UNIT);
    assert_eq!(early.height, 1.5 * HOUR_UNIT);

    // A slot ending after 20:00 extends past the last row.
    let late = position(0, time(19, 0), time(21, 0));
    assert_eq!(late.top + late.height, 14.0 * HOUR_UNIT);
}

#[test]
fn test_minutes_from_grid_start_signed() {
    assert_eq!(minutes_from_grid_start(time(7, 0)), 0);
    assert_eq!(minutes_from_grid_start(time(8, 30)), 90);
    assert_eq!(minutes_from_grid_start(time(6, 45)), -15);
}
