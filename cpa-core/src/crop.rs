use crate::error::{AdvisorError, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// One class the classifier recognizes, with its predicted probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropCandidate {
    pub label: String,
    pub probability: f64,
}

/// A crop recommendation with the classifier's confidence as a whole percentage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedCrop {
    pub crop: String,
    /// Percent, `0..=100`
    pub confidence: u8,
}

/// Classifier output: parallel label and probability arrays in the model's
/// native class order. The order is significant for tie-breaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    labels: Vec<String>,
    probabilities: Vec<f64>,
}

/// Labels and probabilities must line up one-to-one, and every probability
/// must lie in `[0, 1]`.
pub fn validate_class_output(labels: &[String], probabilities: &[f64]) -> Result<()> {
    if labels.len() != probabilities.len() {
        return Err(AdvisorError::InvalidInput(format!(
            "{} labels but {} probabilities",
            labels.len(),
            probabilities.len()
        )));
    }
    if let Some(p) = probabilities
        .iter()
        .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
    {
        return Err(AdvisorError::InvalidInput(format!(
            "probability {p} is outside [0, 1]"
        )));
    }
    Ok(())
}

impl ClassProbabilities {
    pub fn new(labels: Vec<String>, probabilities: Vec<f64>) -> Result<ClassProbabilities> {
        validate_class_output(&labels, &probabilities)?;
        Ok(ClassProbabilities {
            labels,
            probabilities,
        })
    }

    /// Parse classifier output from a `label,probability` CSV with a header row.
    pub fn parse_csv(csv_object: &str) -> Result<ClassProbabilities> {
        let mut labels = Vec::new();
        let mut probabilities = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let label = record.get(0).unwrap_or_default();
            let probability = record.get(1).unwrap_or_default();
            let probability = probability.parse::<f64>().map_err(|_| {
                AdvisorError::InvalidInput(format!(
                    "probability for {label} is not a number: {probability}"
                ))
            })?;
            labels.push(label.to_string());
            probabilities.push(probability);
        }
        ClassProbabilities::new(labels, probabilities)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn candidates(&self) -> impl Iterator<Item = CropCandidate> + '_ {
        self.labels
            .iter()
            .zip(&self.probabilities)
            .map(|(label, probability)| CropCandidate {
                label: label.clone(),
                probability: *probability,
            })
    }
}
