/// Error types for the crop and planting advisor
use thiserror::Error;

/// Main error type for advisor operations
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Malformed or mismatched inputs
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Empty or too-short time series
    #[error("Not enough data: {0}")]
    InsufficientData(String),

    /// Crop is not in the planting-duration table
    #[error("{0} -> Crop is not supported")]
    UnsupportedCrop(String),

    /// Point falls outside the soil or weather coverage
    #[error("Location not supported (longitude: {longitude}, latitude: {latitude})")]
    LocationNotSupported { longitude: f64, latitude: f64 },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

/// Type alias for Results using AdvisorError
pub type Result<T> = std::result::Result<T, AdvisorError>;
