//! Classifier inputs assembled from soil and weather summaries.

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Number of features the crop classifier expects.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in the order the classifier was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Soil nutrient levels and pH at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

/// Average daily weather over a recent multi-year window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Percent
    pub relative_humidity: f64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Millimetres per day
    pub rainfall: f64,
}

impl WeatherSummary {
    /// Average per-year summaries into one, weighting every year equally.
    pub fn mean_of(years: &[WeatherSummary]) -> Result<WeatherSummary> {
        if years.is_empty() {
            return Err(AdvisorError::InsufficientData(
                "no yearly weather summaries to average".to_string(),
            ));
        }
        let n = years.len() as f64;
        let (humidity, temperature, rainfall) =
            years.iter().fold((0.0, 0.0, 0.0), |(h, t, r), year| {
                (
                    h + year.relative_humidity,
                    t + year.temperature,
                    r + year.rainfall,
                )
            });
        Ok(WeatherSummary {
            relative_humidity: humidity / n,
            temperature: temperature / n,
            rainfall: rainfall / n,
        })
    }
}

/// `[N, P, K, temperature, humidity, ph, rainfall]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_parts(soil: &SoilProperties, weather: &WeatherSummary) -> FeatureVector {
        FeatureVector([
            soil.nitrogen,
            soil.phosphorus,
            soil.potassium,
            weather.temperature,
            weather.relative_humidity,
            soil.ph,
            weather.rainfall,
        ])
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Look a feature up by its training-column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.0[i])
    }
}
