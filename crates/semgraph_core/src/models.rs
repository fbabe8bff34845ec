//! Loadable model types: POS tagger weights, dependency parser weights,
//! and margin-to-probability calibration tables.
//!
//! Model *file formats* are an external collaborator's concern (the pack
//! supplies JSON, but any source that can deserialize into these shapes
//! works); this module defines the in-memory shapes every stage reads.

use serde::Deserialize;
use std::collections::HashMap;

/// Averaged-perceptron POS tagger weights: feature (or hashed bucket id,
/// see [`crate::feature_store`]) → tag → weight.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PosModel {
    pub weights: HashMap<String, HashMap<String, f64>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PosModel {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Provenance metadata attached to a loaded dependency model, surfaced in
/// build metadata so callers can pin which model version produced a graph.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ModelProvenance {
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "trainedOn")]
    pub trained_on: String,
}

/// Arc-eager transition-based dependency parser weights.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DepModel {
    pub weights: HashMap<String, HashMap<String, f64>>,
    pub labels: Vec<String>,
    pub transitions: Vec<String>,
    #[serde(rename = "numBuckets", default)]
    pub num_buckets: u32,
    #[serde(default)]
    pub provenance: ModelProvenance,
}

impl DepModel {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A single calibration bin mapping a score margin to a probability.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalibrationBin {
    pub margin: f64,
    pub probability: f64,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Calibration table mapping raw parser score margins to probabilities,
/// sorted by ascending margin. See [`crate::confidence`] for bin lookup
/// and bucket thresholding.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Calibration {
    pub bins: Vec<CalibrationBin>,
}

impl Calibration {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let calibration: Calibration = serde_json::from_str(json)?;
        Ok(calibration)
    }

    /// Builds a calibration table directly from `(margin, probability)`
    /// pairs, sorting by margin. Useful for tests and for constructing a
    /// default calibration without a JSON round trip.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let mut bins: Vec<CalibrationBin> = pairs
            .iter()
            .map(|&(margin, probability)| CalibrationBin {
                margin,
                probability,
                count: None,
            })
            .collect();
        bins.sort_by(|a, b| a.margin.partial_cmp(&b.margin).unwrap());
        Calibration { bins }
    }
}
