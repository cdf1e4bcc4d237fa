//! Supported crop listing.

use anyhow::Context;
use cpa_core::planting_duration::PlantingDurations;
use log::info;

/// Load the planting-duration table, from `path` if given, else the built-in one.
pub fn load_durations(path: Option<&str>) -> anyhow::Result<PlantingDurations> {
    let durations = match path {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read planting durations from {path}"))?;
            PlantingDurations::parse_csv(&body)?
        }
        None => PlantingDurations::embedded()?,
    };
    Ok(durations)
}

/// Print every supported crop and its planting duration as JSON.
pub fn run_crops(durations_csv: Option<&str>) -> anyhow::Result<()> {
    let durations = load_durations(durations_csv)?;
    info!("{} crops with a known planting duration", durations.entries().len());
    println!("{}", serde_json::to_string_pretty(durations.entries())?);
    Ok(())
}
