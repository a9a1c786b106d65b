/*
 *  calendar.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Month grid arithmetic: timestamp decomposition, leap-year day counts,
 *  weekday of the first of the month, (row, col) cell placement
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

use chrono::{DateTime, Datelike, NaiveDate, Timelike};

/// Day counts per month, indexed by [is_leap][month - 1].
const DAYS_IN_MONTH: [[u8; 12]; 2] = [
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Calendar fields of one instant, decomposed once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    /// Month of the year, 1-12.
    pub month: u32,
    /// Day of the month, 1-31.
    pub day: u32,
    /// Hour of the day, 0-23.
    pub hour: u32,
    /// Minute of the hour, 0-59.
    pub minute: u32,
}

impl CalendarDate {
    /// Decompose a Unix timestamp (seconds, UTC) into calendar fields.
    ///
    /// Returns `None` only if the timestamp is outside chrono's
    /// representable range, which cannot happen for a `u32` input.
    pub fn from_unix(unix_time: u32) -> Option<Self> {
        let dt = DateTime::from_timestamp(i64::from(unix_time), 0)?;
        Some(Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        })
    }
}

/// Gregorian leap-year test, delegated to chrono so the day-count table
/// can never disagree with the timestamp decomposition.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}

/// Number of days in the given month, 28-31.
pub fn days_in_month(year: i32, month: u32) -> u8 {
    DAYS_IN_MONTH[usize::from(is_leap_year(year))][(month - 1) as usize]
}

/// Weekday of the first day of the given month, 0=Sunday .. 6=Saturday.
pub fn first_weekday(year: i32, month: u32) -> u8 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday() as u8)
        .unwrap_or(0)
}

/// Grid cell of a day number: a running cursor that starts in the column
/// of the month's first weekday and wraps after column 6.
pub const fn day_cell(first_weekday: u8, day: u8) -> (u8, u8) {
    let idx = first_weekday as u16 + day as u16 - 1;
    ((idx / 7) as u8, (idx % 7) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn leap_years_follow_the_gregorian_rule() {
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // divisible by 100, not 400
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(1996));
    }

    #[test]
    fn february_day_count_tracks_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn fixed_months_match_the_table() {
        for year in [1999, 2000, 2024] {
            for (month, days) in [(1, 31), (4, 30), (7, 31), (8, 31), (9, 30), (12, 31)] {
                assert_eq!(days_in_month(year, month), days, "{year}-{month}");
            }
        }
    }

    #[test]
    fn first_weekday_agrees_with_chrono_for_every_month() {
        for year in 1970..=2100 {
            for month in 1..=12 {
                let fw = first_weekday(year, month);
                assert!(fw <= 6);
                let expected = NaiveDate::from_ymd_opt(year, month, 1)
                    .unwrap()
                    .weekday()
                    .num_days_from_sunday() as u8;
                assert_eq!(fw, expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn first_weekday_known_dates() {
        // 2024-02-01 was a Thursday, 2023-02-01 a Wednesday.
        assert_eq!(first_weekday(2024, 2), 4);
        assert_eq!(first_weekday(2023, 2), 3);
        assert_eq!(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().weekday(),
            Weekday::Thu
        );
    }

    #[test]
    fn day_cell_is_the_division_remainder_pair() {
        for fw in 0..7u8 {
            for day in 1..=31u8 {
                let (row, col) = day_cell(fw, day);
                let idx = u16::from(fw) + u16::from(day) - 1;
                assert_eq!(row, (idx / 7) as u8);
                assert_eq!(col, (idx % 7) as u8);
            }
        }
    }

    #[test]
    fn six_rows_hold_every_month_shape() {
        // Every (first weekday, day count) combination a Gregorian month
        // can produce fits the fixed 6-row grid.
        for fw in 0..7u8 {
            for days in 28..=31u8 {
                let (row, _) = day_cell(fw, days);
                assert!(row < 6, "fw={fw} days={days} row={row}");
            }
        }
    }

    #[test]
    fn from_unix_decomposes_in_utc() {
        let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
            .and_utc()
            .timestamp() as u32;
        let date = CalendarDate::from_unix(ts).unwrap();
        assert_eq!(
            date,
            CalendarDate {
                year: 2024,
                month: 2,
                day: 1,
                hour: 9,
                minute: 5,
            }
        );
    }

    #[test]
    fn from_unix_epoch() {
        let date = CalendarDate::from_unix(0).unwrap();
        assert_eq!(date.year, 1970);
        assert_eq!(date.month, 1);
        assert_eq!(date.day, 1);
    }
}
