//! Shared utility functions for CPA crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Date format used for CSV inputs and JSON output: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Largest day-of-year ordinal (Dec 31 of a leap year).
    pub const MAX_DAY_OF_YEAR: u32 = 366;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Get the 1-based day-of-year for a given date.
    /// Jan 1 = day 1, Dec 31 = day 365 (366 in leap years).
    pub fn day_of_year(date: &NaiveDate) -> u32 {
        date.ordinal()
    }

    /// Returns true if `year` has a Feb 29.
    pub fn is_leap_year(year: i32) -> bool {
        NaiveDate::from_ymd_opt(year, 2, 29).is_some()
    }

    /// Number of days in `year`: 365, or 366 for leap years.
    pub fn days_in_year(year: i32) -> u32 {
        if is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// The date with ordinal `day_of_year` in `year`.
    ///
    /// Day 366 of a non-leap year is clamped to Dec 31. Ordinals outside
    /// `1..=366` give `None`.
    pub fn date_from_day_of_year(year: i32, day_of_year: u32) -> Option<NaiveDate> {
        if !(1..=MAX_DAY_OF_YEAR).contains(&day_of_year) {
            return None;
        }
        NaiveDate::from_yo_opt(year, day_of_year.min(days_in_year(year)))
    }

    /// Move a date to the same month and day of the following year.
    ///
    /// Feb 29 has no counterpart in a non-leap year; it lands on Feb 28.
    /// The flag is true when that clamp happened.
    pub fn same_day_next_year(date: &NaiveDate) -> Option<(NaiveDate, bool)> {
        let year = date.year() + 1;
        match date.with_year(year) {
            Some(d) => Some((d, false)),
            None => NaiveDate::from_ymd_opt(year, 2, 28).map(|d| (d, true)),
        }
    }

}
