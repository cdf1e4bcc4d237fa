use crate::error::{AdvisorError, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded planting-duration table for every crop the classifier knows.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/planting_durations.csv");

/// How many days a crop's planting window spans.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PlantingDuration {
    /// Lower-cased crop name
    pub crop: String,
    pub days: u32,
}

/// Crop name to planting duration lookup, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantingDurations(Vec<PlantingDuration>);

impl PlantingDurations {
    /// The table shipped with the crate.
    pub fn embedded() -> Result<PlantingDurations> {
        PlantingDurations::parse_csv(CSV_OBJECT)
    }

    /// Parse a `crop,duration(days)` CSV with a header row.
    pub fn parse_csv(csv_object: &str) -> Result<PlantingDurations> {
        let mut durations: Vec<PlantingDuration> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let crop = normalize_crop_name(record.get(0).unwrap_or_default());
            if crop.is_empty() {
                return Err(AdvisorError::InvalidInput(
                    "planting duration row with no crop name".to_string(),
                ));
            }
            let days_field = record.get(1).unwrap_or_default();
            let days = days_field.parse::<u32>().map_err(|_| {
                AdvisorError::InvalidInput(format!(
                    "planting duration for {crop} is not a day count: {days_field}"
                ))
            })?;
            if days == 0 {
                return Err(AdvisorError::InvalidInput(format!(
                    "planting duration for {crop} must be at least one day"
                )));
            }
            durations.push(PlantingDuration { crop, days });
        }
        Ok(PlantingDurations(durations))
    }

    /// Case-insensitive lookup of a crop's planting duration in days.
    pub fn duration_for(&self, crop: &str) -> Result<u32> {
        let wanted = normalize_crop_name(crop);
        self.0
            .iter()
            .find(|d| d.crop == wanted)
            .map(|d| d.days)
            .ok_or(AdvisorError::UnsupportedCrop(wanted))
    }

    /// All supported crop names, in table order.
    pub fn crops(&self) -> Vec<String> {
        self.0.iter().map(|d| d.crop.clone()).collect()
    }

    pub fn entries(&self) -> &[PlantingDuration] {
        &self.0
    }
}

fn normalize_crop_name(crop: &str) -> String {
    crop.trim().to_lowercase()
}
