use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(longitude: f64, latitude: f64) -> Result<Location> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AdvisorError::InvalidInput(format!(
                "invalid latitude or longitude ({latitude}, {longitude})"
            )));
        }
        Ok(Location {
            longitude,
            latitude,
        })
    }

    /// The error soil and weather sources return for points outside their coverage.
    pub fn not_supported(&self) -> AdvisorError {
        AdvisorError::LocationNotSupported {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }
}
