//! Global constants shared by the display components and the binary.

/// The total width of the e-paper panel in pixels (2.9" landscape).
pub const DISPLAY_WIDTH: u32 = 296;
/// The total height of the e-paper panel in pixels.
pub const DISPLAY_HEIGHT: u32 = 128;

// Calendar page geometry. The page is laid out top to bottom:
// title, weekday header, 7x6 day grid, time stamp.

/// X-position of the "<year>年<month>月" title.
pub const TITLE_X: i32 = 50;
/// Y-position of the title (top of the glyph box).
pub const TITLE_Y: i32 = 2;

/// Y-position of the weekday header row.
pub const WEEK_HEADER_Y: i32 = 25;

/// X-position of the left edge of the day grid.
pub const GRID_X: i32 = 10;
/// Y-position of the top edge of the day grid.
pub const GRID_Y: i32 = 40;
/// Width of one day cell in pixels.
pub const CELL_WIDTH: i32 = 28;
/// Height of one day cell in pixels.
pub const CELL_HEIGHT: i32 = 12;
/// Number of grid columns, one per weekday.
pub const GRID_COLS: i32 = 7;
/// Number of grid rows. Six rows hold every Gregorian month: the worst
/// case is a 31-day month starting on Saturday, ceil((6 + 31) / 7) = 6.
pub const GRID_ROWS: i32 = 6;

/// Horizontal inset of a day number (and weekday glyph) within its cell.
pub const CELL_TEXT_X_INSET: i32 = 8;
/// Vertical inset of a day number within its cell.
pub const CELL_TEXT_Y_INSET: i32 = 2;

/// X-position of the "HH:MM" stamp near the bottom of the panel.
pub const TIME_X: i32 = 150;
/// Y-position of the "HH:MM" stamp.
pub const TIME_Y: i32 = 115;
