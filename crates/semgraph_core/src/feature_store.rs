//! Feature Store: FNV-1a hashed feature buckets shared by the POS tagger
//! and the dependency parser.
//!
//! Both models train and score over sparse string features ("w0=doctor",
//! "t-1=DT") rather than a fixed dense vector. Instead of keying weight
//! tables by the feature string directly (unbounded vocabulary growth),
//! active features are hashed into a fixed number of buckets and weights
//! are keyed by bucket id. A `num_buckets` of zero disables hashing
//! entirely, keying weights by the literal feature string — useful for
//! small models or exact reproduction of a reference implementation.

use semgraph_base::hash::fnv1a_bucket;
use std::collections::HashMap;

/// Maps feature strings to the weight-table key a loaded model uses.
#[derive(Debug, Clone, Copy)]
pub struct FeatureStore {
    num_buckets: u32,
}

impl FeatureStore {
    /// Creates a feature store hashing into `num_buckets` buckets.
    /// Pass `0` to key weights by the literal feature string.
    pub fn new(num_buckets: u32) -> Self {
        FeatureStore { num_buckets }
    }

    /// The weight-table key for `feature`: its hashed bucket id as a
    /// decimal string, or the feature string itself when hashing is off.
    pub fn key_for(&self, feature: &str) -> String {
        match fnv1a_bucket(feature, self.num_buckets) {
            Some(bucket) => bucket.to_string(),
            None => feature.to_string(),
        }
    }

    pub fn num_buckets(&self) -> u32 {
        self.num_buckets
    }
}

/// Sums per-label weights over a set of active features for every
/// candidate label, as the averaged-perceptron scoring step shared by the
/// tagger (candidate = POS tag) and the parser (candidate = transition).
///
/// Missing weight entries contribute zero rather than erroring: an unseen
/// feature/label pair is ordinary during inference, not a structural fault.
pub fn score<'a>(
    weights: &HashMap<String, HashMap<String, f64>>,
    store: &FeatureStore,
    features: &[String],
    candidates: &[&'a str],
) -> Vec<(&'a str, f64)> {
    candidates
        .iter()
        .map(|&candidate| {
            let mut total = 0.0;
            for feature in features {
                let key = store.key_for(feature);
                if let Some(per_label) = weights.get(&key) {
                    total += per_label.get(candidate).copied().unwrap_or(0.0);
                }
            }
            (candidate, total)
        })
        .collect()
}

/// Returns the best-scoring candidate and the margin between it and the
/// runner-up, used to seed the dependency parser's score-margin recording
/// and, via [`crate::confidence`], the calibrated confidence bucket.
pub fn best_with_margin<'a>(scored: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    if scored.is_empty() {
        return None;
    }
    let mut sorted: Vec<(&str, f64)> = scored.to_vec();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let best = sorted[0];
    let margin = if sorted.len() > 1 {
        best.1 - sorted[1].1
    } else {
        best.1
    };
    Some((best.0, margin))
}
