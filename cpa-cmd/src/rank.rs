//! Crop ranking from classifier output.

use anyhow::Context;
use cpa_core::crop::{ClassProbabilities, RankedCrop};
use cpa_data::ranking::{rank_with, RankingConfig};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RankReport {
    pub config: RankingConfig,
    pub crops: Vec<RankedCrop>,
}

/// Read classifier output from `probabilities_csv` and rank it.
pub fn rank_report(
    probabilities_csv: &str,
    config: &RankingConfig,
) -> anyhow::Result<RankReport> {
    let body = std::fs::read_to_string(probabilities_csv)
        .with_context(|| format!("Failed to read classifier output from {probabilities_csv}"))?;
    let probabilities = ClassProbabilities::parse_csv(&body)?;
    let crops = rank_with(probabilities.labels(), probabilities.probabilities(), config)?;

    info!(
        "{} of {} crops pass the {}% confidence bar",
        crops.len(),
        probabilities.len(),
        config.min_confidence
    );
    Ok(RankReport {
        config: *config,
        crops,
    })
}

/// Rank classifier output and print the recommendations as JSON.
pub fn run_rank(probabilities_csv: &str, config: &RankingConfig) -> anyhow::Result<()> {
    let report = rank_report(probabilities_csv, config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
