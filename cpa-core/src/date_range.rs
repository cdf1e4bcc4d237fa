use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date range, inclusive on both ends.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> DateRange {
        DateRange {
            start_date,
            end_date,
        }
    }

    /// Days from start to end; zero for a single-day range.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
