//! Confidence Annotator: calibrates parser score margins into
//! probabilities, buckets them, and flags PP-attachment ambiguity.

use crate::models::Calibration;
use crate::parser::Arc;

/// A coarse confidence tier. Ordered `Low < Medium < High` so callers can
/// compare buckets directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceBucket {
    Low,
    Medium,
    High,
}

/// PP-attachment is ambiguous between an oblique nominal modifier (`obl`)
/// and a nominal modifier of a noun (`nmod`) — the two labels a
/// preposition phrase could plausibly take.
const PP_ATTACH_LABELS: [&str; 2] = ["obl", "nmod"];

fn is_pp_attach(label: &str) -> bool {
    PP_ATTACH_LABELS.contains(&label)
}

fn alternate_pp_label(label: &str) -> Option<&'static str> {
    match label {
        "obl" => Some("nmod"),
        "nmod" => Some("obl"),
        _ => None,
    }
}

/// Looks up the calibrated probability for margin `m`: the bin with the
/// greatest threshold ≤ m, or the first bin if m is below every
/// threshold, or 0.5 if the table is empty.
pub fn calibrate(calibration: &Calibration, margin: f64) -> f64 {
    if calibration.bins.is_empty() {
        return 0.5;
    }
    let mut best = calibration.bins[0].probability;
    for bin in &calibration.bins {
        if bin.margin <= margin {
            best = bin.probability;
        } else {
            break;
        }
    }
    best
}

/// Buckets a calibrated probability using label-appropriate thresholds:
/// PP-attach arcs (`obl`/`nmod`) need higher confidence to be trusted than
/// default labels, since the attachment choice is inherently ambiguous.
pub fn bucket_for(probability: f64, label: &str) -> ConfidenceBucket {
    if is_pp_attach(label) {
        if probability >= 0.95 {
            ConfidenceBucket::High
        } else if probability >= 0.7 {
            ConfidenceBucket::Medium
        } else {
            ConfidenceBucket::Low
        }
    } else if probability >= 0.9 {
        ConfidenceBucket::High
    } else if probability >= 0.6 {
        ConfidenceBucket::Medium
    } else {
        ConfidenceBucket::Low
    }
}

/// Records that an arc's label was chosen between two plausible PP-attach
/// readings.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeAttachment {
    pub current_label: String,
    pub alternative_label: String,
}

/// Flags a low-confidence arc with the alternative label it might instead
/// carry, and the calibrated probability that triggered the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbiguitySignal {
    pub dependent_id: usize,
    pub head_id: usize,
    pub alternative_label: String,
    pub probability: f64,
}

/// The full confidence annotation for one arc.
pub struct ArcConfidence {
    pub probability: f64,
    pub bucket: ConfidenceBucket,
    pub alternative_attachment: Option<AlternativeAttachment>,
    pub ambiguity_signal: Option<AmbiguitySignal>,
}

/// Annotates a single arc: calibrates its margin, buckets the result, and
/// attaches PP-attach / low-confidence records where they apply.
pub fn annotate_arc(arc: &Arc, calibration: &Calibration) -> ArcConfidence {
    let probability = calibrate(calibration, arc.score_margin);
    let bucket = bucket_for(probability, &arc.label);

    let alternative_attachment = alternate_pp_label(&arc.label).map(|alt| AlternativeAttachment {
        current_label: arc.label.clone(),
        alternative_label: alt.to_string(),
    });

    let ambiguity_signal = if bucket == ConfidenceBucket::Low {
        let alt = alternate_pp_label(&arc.label).unwrap_or("dep");
        Some(AmbiguitySignal {
            dependent_id: arc.dependent_id,
            head_id: arc.head_id,
            alternative_label: alt.to_string(),
            probability,
        })
    } else {
        None
    };

    ArcConfidence { probability, bucket, alternative_attachment, ambiguity_signal }
}

/// An entity's parse confidence is the minimum calibrated probability over
/// every arc whose dependent token lies in the entity's span.
pub fn entity_confidence(span: &[usize], arc_probabilities: &[(usize, f64)]) -> f64 {
    let probs: Vec<f64> = arc_probabilities
        .iter()
        .filter(|(dep, _)| span.contains(dep))
        .map(|(_, p)| *p)
        .collect();
    probs.into_iter().fold(1.0_f64, f64::min)
}

/// A role's parse confidence is the minimum of its entity's and act's
/// confidences.
pub fn role_confidence(entity_confidence: f64, act_confidence: f64) -> f64 {
    entity_confidence.min(act_confidence)
}
