//! Sentence-Mode Classifier ("traffic cop"): decides whether a sentence
//! reads as a structural assertion or a narrated event, and whether its
//! object is complex enough to warrant greedy NER.

use crate::dep_tree::DepTree;
use crate::parser::Arc;
use crate::token::{PosTag, Token};
use semgraph_base::Interner;
use semgraph_lexicon::{classify_verb, VerbClass};

/// Verbs outside the curated stative list that are stative in some readings
/// and eventive in others ("The report represents a summary" vs. "The
/// committee represented the hospital at the hearing").
const AMBIGUOUS_STATIVE_VERBS: &[&str] = &["represent", "constitute", "involve", "reflect"];

/// How one main verb classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbMode {
    StativeDefinite,
    StativeAmbiguous,
    Eventive,
}

/// The sentence-level mode decision, with its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentenceMode {
    Structural { confidence: f64 },
    Narrative,
}

/// Classifies `lemma` as stative-definite, stative-ambiguous, or eventive.
/// `have` is definite-stative unless it's immediately followed by an
/// infinitival "to" or governed by a modal auxiliary, in which case it
/// reads as an obligation (eventive).
pub fn classify_main_verb(verb: &Token, tokens: &[Token], arcs: &[Arc], interner: &Interner) -> VerbMode {
    let lemma = interner.resolve(verb.lemma).to_lowercase();

    if lemma == "have" {
        let followed_by_to = tokens
            .iter()
            .find(|t| t.id == verb.id + 1)
            .map(|t| t.pos == PosTag::To)
            .unwrap_or(false);
        let under_modal = arcs.iter().any(|a| {
            a.head_id == verb.id
                && tokens
                    .iter()
                    .find(|t| t.id == a.dependent_id)
                    .map(|t| t.pos == PosTag::Modal)
                    .unwrap_or(false)
        });
        return if followed_by_to || under_modal { VerbMode::Eventive } else { VerbMode::StativeDefinite };
    }

    if classify_verb(&lemma) == Some(VerbClass::Stative) {
        return VerbMode::StativeDefinite;
    }
    if AMBIGUOUS_STATIVE_VERBS.contains(&lemma.as_str()) {
        return VerbMode::StativeAmbiguous;
    }
    VerbMode::Eventive
}

/// Classifies the whole sentence's mode from its main verbs (the dep
/// tree's roots that are verbs, or every verb token if the tree has no
/// verbal root).
pub fn classify_sentence(tokens: &[Token], tree: &DepTree, arcs: &[Arc], interner: &Interner) -> SentenceMode {
    let mut main_verbs: Vec<&Token> = tree
        .roots()
        .into_iter()
        .filter_map(|id| tokens.iter().find(|t| t.id == id))
        .filter(|t| t.pos.is_verb())
        .collect();
    if main_verbs.is_empty() {
        main_verbs = tokens.iter().filter(|t| t.pos.is_verb()).collect();
    }

    let modes: Vec<VerbMode> = main_verbs.iter().map(|v| classify_main_verb(v, tokens, arcs, interner)).collect();

    if modes.contains(&VerbMode::StativeDefinite) {
        SentenceMode::Structural { confidence: 0.9 }
    } else if modes.contains(&VerbMode::StativeAmbiguous) {
        SentenceMode::Structural { confidence: 0.6 }
    } else {
        SentenceMode::Narrative
    }
}

const CONNECTORS: &[&str] = &["and", "or", "of", "for", ","];

/// Measures the complexity of the tail following the main verb: the share
/// of capitalized tokens plus the count of joining connectors and commas.
/// Auto-enables greedy NER when that measure crosses a threshold and the
/// tail has at least 4 content words (non-determiner, non-punctuation).
pub fn object_complexity_triggers_greedy_ner(tail: &[Token], interner: &Interner) -> bool {
    if tail.is_empty() {
        return false;
    }

    let capitalized = tail
        .iter()
        .filter(|t| interner.resolve(t.text).chars().next().map(char::is_uppercase).unwrap_or(false))
        .count();
    let connectors = tail
        .iter()
        .filter(|t| CONNECTORS.contains(&interner.resolve(t.text).to_lowercase().as_str()))
        .count();
    let content_words = tail
        .iter()
        .filter(|t| !matches!(t.pos, PosTag::Determiner | PosTag::Punctuation))
        .count();

    let density = capitalized as f64 / tail.len() as f64;
    let complexity_score = density + connectors as f64 * 0.25;

    complexity_score >= 0.5 && content_words >= 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag;
    use crate::tokenizer::tokenize;

    fn tokens_for(text: &str, interner: &mut Interner) -> Vec<Token> {
        let raw = tokenize(text, interner);
        let model = crate::models::PosModel::default();
        tag(&raw, &model, interner)
    }

    fn arc(dep: usize, head: usize, label: &str) -> Arc {
        Arc { dependent_id: dep, head_id: head, label: label.to_string(), score_margin: 1.0 }
    }

    #[test]
    fn have_without_to_or_modal_is_stative_definite() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The patient has diabetes", &mut interner);
        let verb = tokens.iter().find(|t| t.pos.is_verb()).unwrap();
        assert_eq!(classify_main_verb(verb, &tokens, &[], &interner), VerbMode::StativeDefinite);
    }

    #[test]
    fn have_followed_by_to_is_eventive() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The patient has to leave", &mut interner);
        let verb = tokens.iter().find(|t| interner.resolve(t.lemma) == "have").unwrap();
        assert_eq!(classify_main_verb(verb, &tokens, &[], &interner), VerbMode::Eventive);
    }

    #[test]
    fn stative_definite_verb_yields_structural_high_confidence() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The file contains the report", &mut interner);
        let tree = DepTree::new(vec![arc(2, 3, "nsubj")]);
        let mode = classify_sentence(&tokens, &tree, &[], &interner);
        assert_eq!(mode, SentenceMode::Structural { confidence: 0.9 });
    }

    #[test]
    fn eventive_only_yields_narrative() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The doctor treated the patient", &mut interner);
        let tree = DepTree::new(vec![arc(2, 3, "nsubj")]);
        let mode = classify_sentence(&tokens, &tree, &[], &interner);
        assert_eq!(mode, SentenceMode::Narrative);
    }

    #[test]
    fn complex_object_with_connectors_and_caps_triggers_greedy_ner() {
        let mut interner = Interner::new();
        let tokens = tokens_for("Acme General Hospital and Beta Regional Clinic", &mut interner);
        assert!(object_complexity_triggers_greedy_ner(&tokens, &interner));
    }

    #[test]
    fn short_plain_object_does_not_trigger_greedy_ner() {
        let mut interner = Interner::new();
        let tokens = tokens_for("the medication", &mut interner);
        assert!(!object_complexity_triggers_greedy_ner(&tokens, &interner));
    }
}
