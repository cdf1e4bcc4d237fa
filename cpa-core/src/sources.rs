//! Seams to the collaborators that acquire data and run the model.
//!
//! Implementations own their own clients, caching and retries. Recommendation
//! code only ever sees already-resolved values through these traits, and
//! passes their errors (`LocationNotSupported`, `UnsupportedCrop`, ...) on
//! unchanged.

use crate::{
    crop::ClassProbabilities,
    error::Result,
    features::{FeatureVector, SoilProperties, WeatherSummary},
    location::Location,
    rainfall::DailySample,
};

/// Soil nutrient and pH lookup for a point.
pub trait SoilSource {
    fn soil_properties(&self, location: &Location) -> Result<SoilProperties>;
}

/// Recent multi-year weather averages for a point, used as classifier input.
pub trait WeatherSource {
    fn weather_summary(&self, location: &Location) -> Result<WeatherSummary>;
}

/// Multi-year daily rainfall history for a point, used for planting windows.
pub trait RainfallHistorySource {
    fn rainfall_history(&self, location: &Location) -> Result<Vec<DailySample>>;
}

/// The trained crop classifier, treated as a black box.
pub trait CropClassifier {
    /// A probability per known crop label, in the model's class order.
    fn predict(&self, features: &FeatureVector) -> Result<ClassProbabilities>;
}
