//! Clause Segmenter: splits a coordinated sentence on its first
//! coordinating conjunction into independent clauses, or leaves a bare VP
//! coordination alone.

use crate::parser::Arc;
use crate::token::{PosTag, Token};
use semgraph_base::Interner;

const COORDINATORS: &[&str] = &["and", "but", "or", "nor", "yet", "so"];
const PASSIVE_AUX: &[&str] = &["was", "were", "is", "are", "been", "being", "be"];

/// Which of the three coordination shapes the segmenter decided this
/// sentence has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseCase {
    /// Both sides have an explicit subject and verb: split into two clauses.
    ExplicitSubjectBothSides,
    /// The right side opens with a passive auxiliary or `did`-inversion:
    /// split, and the left clause's subject is injected into the right.
    EllipticalRightSubject,
    /// The right side is a bare verb phrase sharing the left subject: no
    /// split, this is VP coordination.
    BareVpCoordination,
}

/// The discourse relation a conjunction maps to between two split clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseRelation {
    AndThen,
    ContrastsWith,
    AlternativeTo,
    InOrderThat,
    Therefore,
}

impl ClauseRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            ClauseRelation::AndThen => "and_then",
            ClauseRelation::ContrastsWith => "contrasts_with",
            ClauseRelation::AlternativeTo => "alternative_to",
            ClauseRelation::InOrderThat => "in_order_that",
            ClauseRelation::Therefore => "therefore",
        }
    }
}

/// The result of segmenting one coordinating conjunction out of a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub case: ClauseCase,
    pub relation: &'static str,
    pub conjunction_token_id: usize,
    pub left_token_ids: Vec<usize>,
    pub right_token_ids: Vec<usize>,
    /// Set only for [`ClauseCase::EllipticalRightSubject`]: the left
    /// clause's subject token id, injected as the right clause's subject.
    pub injected_subject: Option<usize>,
}

/// Finds the first coordinating conjunction and classifies the sentence's
/// coordination shape. Returns `None` if no coordinator is present.
pub fn segment(tokens: &[Token], arcs: &[Arc], interner: &Interner) -> Option<Segmentation> {
    let conj = tokens.iter().find(|t| {
        t.pos == PosTag::Conjunction && COORDINATORS.contains(&interner.resolve(t.text).to_lowercase().as_str())
    })?;
    let conj_id = conj.id;
    let conj_word = interner.resolve(conj.text).to_lowercase();

    let left_ids: Vec<usize> = tokens.iter().filter(|t| t.id < conj_id).map(|t| t.id).collect();
    let right_ids: Vec<usize> = tokens.iter().filter(|t| t.id > conj_id).map(|t| t.id).collect();

    let right_has_subject = arcs
        .iter()
        .any(|a| (a.label == "nsubj" || a.label == "nsubj:pass") && right_ids.contains(&a.dependent_id));

    let right_starts_with_passive_or_did = right_ids
        .first()
        .and_then(|id| tokens.iter().find(|t| t.id == *id))
        .map(|t| {
            let word = interner.resolve(t.text).to_lowercase();
            PASSIVE_AUX.contains(&word.as_str()) || word == "did"
        })
        .unwrap_or(false);

    let left_subject = arcs
        .iter()
        .find(|a| (a.label == "nsubj" || a.label == "nsubj:pass") && left_ids.contains(&a.dependent_id))
        .map(|a| a.dependent_id);

    let (case, injected_subject) = if right_has_subject {
        (ClauseCase::ExplicitSubjectBothSides, None)
    } else if right_starts_with_passive_or_did {
        (ClauseCase::EllipticalRightSubject, left_subject)
    } else {
        (ClauseCase::BareVpCoordination, None)
    };

    let relation = map_relation(&conj_word, tokens, conj_id, interner);

    Some(Segmentation {
        case,
        relation: relation.as_str(),
        conjunction_token_id: conj_id,
        left_token_ids: left_ids,
        right_token_ids: right_ids,
        injected_subject,
    })
}

fn map_relation(conj_word: &str, tokens: &[Token], conj_id: usize, interner: &Interner) -> ClauseRelation {
    match conj_word {
        "and" => ClauseRelation::AndThen,
        "but" | "yet" => ClauseRelation::ContrastsWith,
        "or" | "nor" => ClauseRelation::AlternativeTo,
        "so" => disambiguate_so(tokens, conj_id, interner),
        _ => ClauseRelation::AndThen,
    }
}

/// "so" disambiguates to `in_order_that` when immediately followed by
/// "that", "as to", or a modal auxiliary; otherwise to `therefore`.
fn disambiguate_so(tokens: &[Token], conj_id: usize, interner: &Interner) -> ClauseRelation {
    let following: Vec<&Token> = tokens.iter().filter(|t| t.id > conj_id).take(3).collect();
    let first_word = following.first().map(|t| interner.resolve(t.text).to_lowercase());
    let second_word = following.get(1).map(|t| interner.resolve(t.text).to_lowercase());

    let starts_with_that = first_word.as_deref() == Some("that");
    let starts_with_as_to = first_word.as_deref() == Some("as") && second_word.as_deref() == Some("to");
    let has_modal = following.iter().any(|t| t.pos == PosTag::Modal);

    if starts_with_that || starts_with_as_to || has_modal {
        ClauseRelation::InOrderThat
    } else {
        ClauseRelation::Therefore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag;
    use crate::tokenizer::tokenize;

    fn arc(dep: usize, head: usize, label: &str) -> Arc {
        Arc { dependent_id: dep, head_id: head, label: label.to_string(), score_margin: 1.0 }
    }

    fn tokens_for(text: &str, interner: &mut Interner) -> Vec<Token> {
        let raw = tokenize(text, interner);
        let model = crate::models::PosModel::default();
        tag(&raw, &model, interner)
    }

    #[test]
    fn explicit_subjects_both_sides_splits() {
        let mut interner = Interner::new();
        // "The doctor arrived and the nurse left"
        let tokens = tokens_for("The doctor arrived and the nurse left", &mut interner);
        let arcs = vec![arc(2, 3, "nsubj"), arc(6, 7, "nsubj")];
        let seg = segment(&tokens, &arcs, &interner).unwrap();
        assert_eq!(seg.case, ClauseCase::ExplicitSubjectBothSides);
        assert_eq!(seg.relation, "and_then");
    }

    #[test]
    fn elliptical_right_subject_injects_left_subject() {
        let mut interner = Interner::new();
        // "The nurse filed the report but was reviewed quickly"
        let tokens = tokens_for("The nurse filed the report but was reviewed quickly", &mut interner);
        let arcs = vec![arc(2, 3, "nsubj")];
        let seg = segment(&tokens, &arcs, &interner).unwrap();
        assert_eq!(seg.case, ClauseCase::EllipticalRightSubject);
        assert_eq!(seg.injected_subject, Some(2));
        assert_eq!(seg.relation, "contrasts_with");
    }

    #[test]
    fn bare_vp_coordination_does_not_split() {
        let mut interner = Interner::new();
        // "The nurse filed the report and reviewed the chart"
        let tokens = tokens_for("The nurse filed the report and reviewed the chart", &mut interner);
        let arcs = vec![arc(2, 3, "nsubj")];
        let seg = segment(&tokens, &arcs, &interner).unwrap();
        assert_eq!(seg.case, ClauseCase::BareVpCoordination);
    }

    #[test]
    fn so_disambiguates_to_therefore_without_modal_or_that() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The alarm sounded so everyone evacuated", &mut interner);
        let arcs = vec![arc(2, 3, "nsubj"), arc(5, 6, "nsubj")];
        let seg = segment(&tokens, &arcs, &interner).unwrap();
        assert_eq!(seg.relation, "therefore");
    }

    #[test]
    fn no_coordinator_returns_none() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The doctor treated the patient", &mut interner);
        assert!(segment(&tokens, &[], &interner).is_none());
    }
}
