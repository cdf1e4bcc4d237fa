use cpa_core::crop::{validate_class_output, RankedCrop};
use cpa_core::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// How many of the most probable crops are considered.
pub const DEFAULT_TOP_K: usize = 3;

/// Crops must score strictly above this percentage to be recommended.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub top_k: usize,
    pub min_confidence: u8,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            top_k: DEFAULT_TOP_K,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

/// Pick the `top_k` most probable labels and keep those whose rounded
/// percentage is strictly above `min_confidence`.
///
/// Output is sorted by probability, highest first. On exact ties the label
/// that comes later in the classifier's class order wins. The list is never
/// padded, so it may hold fewer than `top_k` entries or none at all.
pub fn rank_with(
    labels: &[String],
    probabilities: &[f64],
    config: &RankingConfig,
) -> Result<Vec<RankedCrop>> {
    validate_class_output(labels, probabilities)?;

    // ascending by (probability, index); the tail holds the winners
    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    order.sort_by(|&a, &b| {
        probabilities[a]
            .total_cmp(&probabilities[b])
            .then(a.cmp(&b))
    });

    let ranked = order
        .iter()
        .rev()
        .take(config.top_k)
        .filter_map(|&i| {
            let confidence = to_percent(probabilities[i]);
            if confidence > config.min_confidence {
                Some(RankedCrop {
                    crop: labels[i].clone(),
                    confidence,
                })
            } else {
                debug!(
                    "Dropping {} at {}% (needs more than {}%)",
                    labels[i], confidence, config.min_confidence
                );
                None
            }
        })
        .collect::<Vec<_>>();
    Ok(ranked)
}

/// Probability in `[0, 1]` as a whole percentage, halves rounded to even.
pub fn to_percent(probability: f64) -> u8 {
    (probability * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}
