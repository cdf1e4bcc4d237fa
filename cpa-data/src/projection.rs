use crate::windows::PlantingWindow;
use chrono::{Datelike, NaiveDate, TimeDelta};
use cpa_core::date_range::DateRange;
use cpa_core::error::{AdvisorError, Result};
use cpa_utils::dates::{date_from_day_of_year, days_in_year, format_date, same_day_next_year};
use log::{debug, warn};

/// Map a day-of-year onto its next calendar occurrence on or after `today`.
///
/// The anchor is first placed in `today`'s year. If that date has already
/// passed, the year field is incremented (month and day are kept). The range
/// always ends `span_days` after the start.
///
/// Day 366 in a non-leap year is placed on Dec 31, and a Feb 29 start that
/// rolls into a non-leap year lands on Feb 28.
pub fn project_anchor(anchor_day: u32, today: NaiveDate, span_days: u32) -> Result<DateRange> {
    let year = today.year();
    if anchor_day > days_in_year(year) {
        warn!("Day {anchor_day} does not exist in {year}; using Dec 31");
    }
    let mut start = date_from_day_of_year(year, anchor_day).ok_or_else(|| {
        AdvisorError::InvalidInput(format!("day of year {anchor_day} is outside 1..=366"))
    })?;

    if start < today {
        let (next, clamped) = same_day_next_year(&start).ok_or_else(|| {
            AdvisorError::InvalidInput(format!("cannot move {start} into the next year"))
        })?;
        if clamped {
            warn!("{start} has no counterpart in {}; using {next}", next.year());
        }
        debug!(
            "Day {anchor_day} already passed this year, moving to {}",
            format_date(&next)
        );
        start = next;
    }

    let end = TimeDelta::try_days(i64::from(span_days))
        .and_then(|span| start.checked_add_signed(span))
        .ok_or_else(|| {
            AdvisorError::InvalidInput(format!("cannot add {span_days} days to {start}"))
        })?;
    Ok(DateRange::new(start, end))
}

/// Project every selected window, keeping their order.
pub fn project_windows(
    windows: &[PlantingWindow],
    today: NaiveDate,
    span_days: u32,
) -> Result<Vec<DateRange>> {
    windows
        .iter()
        .map(|window| project_anchor(window.anchor_day, today, span_days))
        .collect()
}
