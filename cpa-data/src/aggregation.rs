use cpa_core::error::{AdvisorError, Result};
use cpa_core::rainfall::{DailySample, DayOfYearAverage};
use cpa_utils::dates::day_of_year;
use log::debug;
use std::collections::BTreeMap;

/// Collapse a multi-year daily history into one average per day-of-year.
///
/// Each bucket is the plain mean of every sample that falls on that ordinal,
/// duplicates included. Ordinals missing from the history stay missing;
/// nothing is interpolated. Day 366 only ever gets samples from leap years.
/// The result is sorted by `day_of_year`.
pub fn average_by_day_of_year(samples: &[DailySample]) -> Result<Vec<DayOfYearAverage>> {
    if samples.is_empty() {
        return Err(AdvisorError::InsufficientData(
            "rainfall history is empty".to_string(),
        ));
    }

    let mut buckets: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for sample in samples {
        if !sample.rainfall.is_finite() || sample.rainfall < 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "rainfall on {} must be a non-negative number, got {}",
                sample.date, sample.rainfall
            )));
        }
        let entry = buckets.entry(day_of_year(&sample.date)).or_insert((0.0, 0));
        entry.0 += sample.rainfall;
        entry.1 += 1;
    }

    debug!(
        "Averaged {} rainfall samples into {} day-of-year buckets",
        samples.len(),
        buckets.len()
    );

    Ok(buckets
        .into_iter()
        .map(|(day_of_year, (total, count))| DayOfYearAverage {
            day_of_year,
            average_rainfall: total / count as f64,
        })
        .collect())
}
