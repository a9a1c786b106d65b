/*
 *  display/components/calendar_page.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Full-screen monthly calendar page component
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use core::fmt::{Debug, Write as _};

use arrayvec::ArrayString;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use u8g2_fonts::types::{FontColor, VerticalPosition};
use u8g2_fonts::{FontRenderer, fonts};

use crate::calendar::{self, CalendarDate};
use crate::constants::{
    CELL_HEIGHT, CELL_TEXT_X_INSET, CELL_TEXT_Y_INSET, CELL_WIDTH, GRID_COLS, GRID_ROWS, GRID_X,
    GRID_Y, TIME_X, TIME_Y, TITLE_X, TITLE_Y, WEEK_HEADER_Y,
};
use crate::display::error::DisplayError;

/// Weekday header glyphs, Sunday first.
const WEEKDAY_NAMES: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Monthly calendar page.
///
/// One `render()` call produces the complete page for the month containing
/// the given instant: title, weekday header, day grid, day numbers with the
/// current day inverted, and an HH:MM stamp. The pass is a single linear
/// sequence of draw calls with no state carried between invocations, so
/// rendering the same timestamp twice yields identical framebuffers.
pub struct CalendarPage {
    /// 16 px WQY font for the title and the time stamp.
    title_font: FontRenderer,
    /// 12 px WQY font for the weekday header and day numbers.
    text_font: FontRenderer,
}

impl CalendarPage {
    pub fn new() -> Self {
        Self {
            title_font: FontRenderer::new::<fonts::u8g2_font_wqy16_t_gb2312>(),
            text_font: FontRenderer::new::<fonts::u8g2_font_wqy12_t_gb2312>(),
        }
    }

    /// Render the calendar page for the month containing `unix_time` (UTC).
    pub fn render<D>(&self, unix_time: u32, target: &mut D) -> Result<(), DisplayError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: Debug,
    {
        let date = CalendarDate::from_unix(unix_time)
            .ok_or(DisplayError::InvalidTimestamp(unix_time))?;

        target.clear(BinaryColor::Off).map_err(draw_err)?;
        self.draw_title(target, &date)?;
        self.draw_week_header(target)?;
        self.draw_grid(target)?;
        self.draw_days(target, &date)?;
        self.draw_time(target, &date)?;
        Ok(())
    }

    /// "<year>年<month>月" at the top of the page.
    fn draw_title<D>(&self, target: &mut D, date: &CalendarDate) -> Result<(), DisplayError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: Debug,
    {
        let label = title_label(date.year, date.month)?;
        self.title_font
            .render(
                label.as_str(),
                Point::new(TITLE_X, TITLE_Y),
                VerticalPosition::Top,
                FontColor::Transparent(BinaryColor::On),
                target,
            )
            .map_err(font_err)?;
        Ok(())
    }

    /// One weekday glyph per grid column.
    fn draw_week_header<D>(&self, target: &mut D) -> Result<(), DisplayError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: Debug,
    {
        for (i, name) in WEEKDAY_NAMES.iter().enumerate() {
            let x = GRID_X + i as i32 * CELL_WIDTH + CELL_TEXT_X_INSET;
            self.text_font
                .render(
                    *name,
                    Point::new(x, WEEK_HEADER_Y),
                    VerticalPosition::Top,
                    FontColor::Transparent(BinaryColor::On),
                    target,
                )
                .map_err(font_err)?;
        }
        Ok(())
    }

    /// The 7x6 cell grid, 1 px lines.
    fn draw_grid<D>(&self, target: &mut D) -> Result<(), DisplayError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: Debug,
    {
        let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        let grid_width = GRID_COLS * CELL_WIDTH;
        let grid_height = GRID_ROWS * CELL_HEIGHT;

        for i in 0..=GRID_ROWS {
            let y = GRID_Y + i * CELL_HEIGHT;
            Line::new(Point::new(GRID_X, y), Point::new(GRID_X + grid_width, y))
                .into_styled(style)
                .draw(target)
                .map_err(draw_err)?;
        }
        for i in 0..=GRID_COLS {
            let x = GRID_X + i * CELL_WIDTH;
            Line::new(Point::new(x, GRID_Y), Point::new(x, GRID_Y + grid_height))
                .into_styled(style)
                .draw(target)
                .map_err(draw_err)?;
        }
        Ok(())
    }

    /// Day numbers 1..N, cursor starting in the first weekday's column.
    /// The current day's cell is filled solid with its digits knocked out.
    fn draw_days<D>(&self, target: &mut D, date: &CalendarDate) -> Result<(), DisplayError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: Debug,
    {
        let first = calendar::first_weekday(date.year, date.month);
        let days = calendar::days_in_month(date.year, date.month);

        for day in 1..=days {
            let (row, col) = calendar::day_cell(first, day);
            let cell_x = GRID_X + i32::from(col) * CELL_WIDTH;
            let cell_y = GRID_Y + i32::from(row) * CELL_HEIGHT;
            let origin = Point::new(cell_x + CELL_TEXT_X_INSET, cell_y + CELL_TEXT_Y_INSET);
            let label = day_label(day)?;

            let is_today = u32::from(day) == date.day;
            if is_today {
                Rectangle::with_corners(
                    Point::new(cell_x + 1, cell_y + 1),
                    Point::new(cell_x + CELL_WIDTH - 1, cell_y + CELL_HEIGHT - 1),
                )
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target)
                .map_err(draw_err)?;
            }

            let color = if is_today {
                BinaryColor::Off
            } else {
                BinaryColor::On
            };
            self.text_font
                .render(
                    label.as_str(),
                    origin,
                    VerticalPosition::Top,
                    FontColor::Transparent(color),
                    target,
                )
                .map_err(font_err)?;
        }
        Ok(())
    }

    /// Zero-padded "HH:MM" near the bottom of the page.
    fn draw_time<D>(&self, target: &mut D, date: &CalendarDate) -> Result<(), DisplayError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: Debug,
    {
        let label = time_label(date.hour, date.minute)?;
        self.title_font
            .render(
                label.as_str(),
                Point::new(TIME_X, TIME_Y),
                VerticalPosition::Top,
                FontColor::Transparent(BinaryColor::On),
                target,
            )
            .map_err(font_err)?;
        Ok(())
    }
}

impl Default for CalendarPage {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_err<E: Debug>(err: E) -> DisplayError {
    DisplayError::Draw(format!("{err:?}"))
}

fn font_err<E: Debug>(err: u8g2_fonts::Error<E>) -> DisplayError {
    match err {
        u8g2_fonts::Error::GlyphNotFound(c) => DisplayError::GlyphNotFound(c),
        other => DisplayError::Font(format!("{other:?}")),
    }
}

fn title_label(year: i32, month: u32) -> Result<ArrayString<16>, DisplayError> {
    let mut label = ArrayString::new();
    write!(label, "{year}年{month}月")?;
    Ok(label)
}

fn time_label(hour: u32, minute: u32) -> Result<ArrayString<8>, DisplayError> {
    let mut label = ArrayString::new();
    write!(label, "{hour:02}:{minute:02}")?;
    Ok(label)
}

fn day_label(day: u8) -> Result<ArrayString<2>, DisplayError> {
    let mut label = ArrayString::new();
    write!(label, "{day}")?;
    Ok(label)
}
