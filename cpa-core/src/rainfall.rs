use crate::error::{AdvisorError, Result};
use chrono::NaiveDate;
use cpa_utils::dates::parse_date;
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use serde::{Deserialize, Serialize};

/// Expected number of columns in a rainfall history CSV row: `date,rainfall`.
pub const CSV_ROW_LENGTH: usize = 2;

/// One observed day of rainfall, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub rainfall: f64,
}

impl DailySample {
    /// Rainfall must be a finite, non-negative amount.
    pub fn new(date: NaiveDate, rainfall: f64) -> Result<DailySample> {
        if !rainfall.is_finite() || rainfall < 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "rainfall on {date} must be a non-negative number, got {rainfall}"
            )));
        }
        Ok(DailySample { date, rainfall })
    }

    /// Parse a rainfall history CSV (`date,rainfall` with a header row).
    ///
    /// Rows with a blank rainfall cell are days the archive did not report;
    /// they are skipped rather than treated as zero.
    pub fn parse_csv(csv_object: &str) -> Result<Vec<DailySample>> {
        let mut samples = Vec::new();
        let mut skipped = 0usize;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            match DailySample::from_record(&record)? {
                Some(sample) => samples.push(sample),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!("Skipped {skipped} rainfall rows with no recorded value");
        }
        Ok(samples)
    }

    fn from_record(record: &StringRecord) -> Result<Option<DailySample>> {
        if record.len() != CSV_ROW_LENGTH {
            return Err(AdvisorError::InvalidInput(format!(
                "expected {CSV_ROW_LENGTH} columns (date,rainfall), found {}",
                record.len()
            )));
        }
        let date_field = record.get(0).unwrap_or_default();
        let date = parse_date(date_field)
            .map_err(|e| AdvisorError::DateParse(format!("{date_field}: {e}")))?;
        let rainfall_field = record.get(1).unwrap_or_default();
        if rainfall_field.is_empty() {
            return Ok(None);
        }
        let rainfall = rainfall_field.parse::<f64>().map_err(|_| {
            AdvisorError::InvalidInput(format!(
                "rainfall on {date} is not a number: {rainfall_field}"
            ))
        })?;
        DailySample::new(date, rainfall).map(Some)
    }
}

/// Mean rainfall for one day-of-year bucket across every year in the history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayOfYearAverage {
    /// 1-based ordinal, `1..=366`
    pub day_of_year: u32,
    pub average_rainfall: f64,
}
