pub mod crop;
pub mod date_range;
pub mod error;
pub mod features;
pub mod location;
pub mod planting_duration;
pub mod rainfall;
pub mod sources;
