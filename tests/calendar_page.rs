/*
 *  tests/calendar_page.rs
 *
 *  Integration tests for the monthly calendar page
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 */

use chrono::NaiveDate;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use moncal::calendar;
use moncal::constants::{
    CELL_HEIGHT, CELL_WIDTH, DISPLAY_HEIGHT, DISPLAY_WIDTH, GRID_COLS, GRID_ROWS, GRID_X, GRID_Y,
};
use moncal::display::CalendarPage;
use moncal::display::MockPanel;

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
        .timestamp() as u32
}

fn rendered(unix_time: u32) -> MockPanel {
    let mut panel = MockPanel::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    CalendarPage::new().render(unix_time, &mut panel).unwrap();
    panel
}

/// Interior of a day cell: everything inside the 1 px grid lines.
fn cell_interior(row: u8, col: u8) -> Rectangle {
    let x = GRID_X + i32::from(col) * CELL_WIDTH;
    let y = GRID_Y + i32::from(row) * CELL_HEIGHT;
    Rectangle::new(
        Point::new(x + 1, y + 1),
        Size::new(CELL_WIDTH as u32 - 1, CELL_HEIGHT as u32 - 1),
    )
}

/// Lower half of a cell interior. Glyph ink from the row above can spill a
/// pixel or two past the separating grid line, so emptiness is asserted on
/// the lower half only.
fn cell_lower_half(row: u8, col: u8) -> Rectangle {
    let x = GRID_X + i32::from(col) * CELL_WIDTH;
    let y = GRID_Y + i32::from(row) * CELL_HEIGHT;
    Rectangle::new(
        Point::new(x + 1, y + 6),
        Size::new(CELL_WIDTH as u32 - 1, CELL_HEIGHT as u32 - 6),
    )
}

/// An inverted cell is almost entirely lit; a normal cell carries only
/// digit ink.
const INVERTED_MIN: usize = 200;
const DIGIT_MIN: usize = 3;

#[test]
fn grid_lines_are_drawn_at_cell_boundaries() {
    let panel = rendered(ts(2024, 2, 1, 9, 5));
    let grid_w = (GRID_COLS * CELL_WIDTH) as u32;
    let grid_h = (GRID_ROWS * CELL_HEIGHT) as u32;

    // The inverted day's knocked-out digits may clip the line directly
    // below their cell, so that one segment is exempt.
    let (today_row, today_col) = calendar::day_cell(calendar::first_weekday(2024, 2), 1);
    let exempt_y = (GRID_Y + (i32::from(today_row) + 1) * CELL_HEIGHT) as u32;
    let exempt_x0 = (GRID_X + i32::from(today_col) * CELL_WIDTH) as u32;
    let exempt_x1 = exempt_x0 + CELL_WIDTH as u32;

    for i in 0..=GRID_ROWS {
        let y = (GRID_Y + i * CELL_HEIGHT) as u32;
        for x in GRID_X as u32..=GRID_X as u32 + grid_w {
            if y == exempt_y && (exempt_x0..=exempt_x1).contains(&x) {
                continue;
            }
            assert_eq!(
                panel.get_pixel(x, y),
                Some(BinaryColor::On),
                "horizontal line {i} broken at x={x}"
            );
        }
    }
    for i in 0..=GRID_COLS {
        let x = (GRID_X + i * CELL_WIDTH) as u32;
        for y in GRID_Y as u32..=GRID_Y as u32 + grid_h {
            assert_eq!(
                panel.get_pixel(x, y),
                Some(BinaryColor::On),
                "vertical line {i} broken at y={y}"
            );
        }
    }
}

#[test]
fn leap_february_places_29_days_from_the_first_weekday() {
    let panel = rendered(ts(2024, 2, 1, 9, 5));

    let first = calendar::first_weekday(2024, 2);
    assert_eq!(first, 4, "2024-02-01 was a Thursday");
    assert_eq!(calendar::days_in_month(2024, 2), 29);

    for idx in 0..(GRID_ROWS * GRID_COLS) as u16 {
        let (row, col) = ((idx / 7) as u8, (idx % 7) as u8);
        let occupied = idx >= u16::from(first) && idx < u16::from(first) + 29;
        if occupied {
            assert!(
                panel.count_on_in_rect(&cell_interior(row, col)) >= DIGIT_MIN,
                "cell ({row},{col}) should hold a day number"
            );
        } else {
            assert_eq!(
                panel.count_on_in_rect(&cell_lower_half(row, col)),
                0,
                "cell ({row},{col}) should be empty"
            );
        }
    }
}

#[test]
fn only_the_current_day_cell_is_inverted() {
    // 2023-02-15, a non-leap February of 28 days.
    let panel = rendered(ts(2023, 2, 15, 12, 0));

    let first = calendar::first_weekday(2023, 2);
    assert_eq!(first, 3, "2023-02-01 was a Wednesday");
    let days = calendar::days_in_month(2023, 2);
    assert_eq!(days, 28);

    let mut inverted = Vec::new();
    for day in 1..=days {
        let (row, col) = calendar::day_cell(first, day);
        let lit = panel.count_on_in_rect(&cell_interior(row, col));
        assert!(lit >= DIGIT_MIN, "day {day} missing from cell ({row},{col})");
        if lit >= INVERTED_MIN {
            inverted.push(day);
        }
    }
    assert_eq!(inverted, vec![15]);

    // Day 15 sits where the running cursor puts it.
    assert_eq!(calendar::day_cell(first, 15), (2, 3));
}

#[test]
fn inverted_cell_keeps_its_digits_readable() {
    let panel = rendered(ts(2023, 2, 15, 12, 0));
    let (row, col) = calendar::day_cell(3, 15);
    let interior = cell_interior(row, col);
    let lit = panel.count_on_in_rect(&interior);
    let total = (interior.size.width * interior.size.height) as usize;
    // Solid fill with the digits knocked out: mostly lit, but not fully.
    assert!(lit >= INVERTED_MIN);
    assert!(lit < total, "digits should be knocked out of the fill");
}

#[test]
fn rows_past_the_last_day_stay_empty() {
    // 28 days starting Wednesday end on row 4; row 5 is never touched.
    let panel = rendered(ts(2023, 2, 15, 12, 0));
    for col in 0..7 {
        assert_eq!(panel.count_on_in_rect(&cell_lower_half(5, col)), 0);
    }
}

#[test]
fn title_header_and_time_stamp_have_ink() {
    let panel = rendered(ts(2024, 2, 1, 9, 5));

    // "2024年2月"
    let title = Rectangle::new(Point::new(50, 2), Size::new(100, 20));
    assert!(panel.count_on_in_rect(&title) > 0, "title missing");

    // one glyph per weekday column
    for i in 0..7 {
        let cell = Rectangle::new(
            Point::new(GRID_X + i * CELL_WIDTH, 25),
            Size::new(CELL_WIDTH as u32, 14),
        );
        assert!(
            panel.count_on_in_rect(&cell) > 0,
            "weekday glyph {i} missing"
        );
    }

    // "09:05"
    let time = Rectangle::new(Point::new(150, 115), Size::new(60, 13));
    assert!(panel.count_on_in_rect(&time) > 0, "time stamp missing");
}

#[test]
fn rendering_is_deterministic() {
    let unix_time = ts(2024, 2, 29, 23, 59);
    let first = rendered(unix_time);
    let second = rendered(unix_time);
    assert_eq!(first.framebuffer(), second.framebuffer());
}

#[test]
fn consecutive_renders_do_not_accumulate_state() {
    let mut panel = MockPanel::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let page = CalendarPage::new();

    // A crowded month first, then a sparse one; the second render must not
    // retain any cells from the first.
    page.render(ts(2024, 12, 31, 0, 0), &mut panel).unwrap();
    page.render(ts(2023, 2, 15, 12, 0), &mut panel).unwrap();

    let fresh = rendered(ts(2023, 2, 15, 12, 0));
    assert_eq!(panel.framebuffer(), fresh.framebuffer());
}
