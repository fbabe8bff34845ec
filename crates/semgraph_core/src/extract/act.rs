//! Tree Act Extractor: one act per finite verb, with passive/negation/
//! modality detection and inanimate-agent retyping for inference verbs.

use crate::parser::Arc;
use crate::token::{PosTag, Token};
use semgraph_base::Interner;
use semgraph_lexicon::classify_verb;
use std::collections::HashMap;

/// Whether the act actually occurred, is merely asserted as required, or is
/// a supposition under a conditional marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuality {
    Actual,
    Prescribed,
    Hypothetical,
}

/// The modal force a verb's governing modal auxiliary expresses, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Obligation,
    ObligationWeak,
    Permission,
    Prohibition,
    Intention,
}

fn modality_for(word: &str) -> Option<Modality> {
    match word {
        "must" | "shall" => Some(Modality::Obligation),
        "should" | "ought" => Some(Modality::ObligationWeak),
        "may" | "can" => Some(Modality::Permission),
        "cannot" => Some(Modality::Prohibition),
        "will" => Some(Modality::Intention),
        _ => None,
    }
}

/// One extracted act: its governing verb token, ontology type, actuality,
/// and the flags the UD tree directly evidences (passive, negated, copula).
#[derive(Debug, Clone, PartialEq)]
pub struct Act {
    pub verb_token_id: usize,
    pub lemma: String,
    pub ontology_type: String,
    pub actuality: Actuality,
    pub modality: Option<String>,
    pub is_passive: bool,
    pub is_negated: bool,
    pub is_copula: bool,
    /// Set when an inanimate subject drives an inference verb: the act is
    /// retyped to an information-content node rather than an intentional act.
    pub retyped_as_inference: bool,
    /// The lemma of a control verb governing this act via an infinitive
    /// complement ("needs to drop" → act is `drop`, control_verb is `need`).
    pub control_verb: Option<String>,
}

/// Control verbs whose infinitive complement inherits an implied modality
/// ("needs to drop" reads as an obligation on the complement).
const CONTROL_MODALS: &[(&str, Modality)] =
    &[("need", Modality::Obligation), ("want", Modality::Intention), ("try", Modality::Intention)];

fn control_modal_for(lemma: &str) -> Option<Modality> {
    CONTROL_MODALS.iter().find(|(w, _)| *w == lemma).map(|(_, m)| *m)
}

/// Extracts one [`Act`] per finite verb token, skipping verbs whose token
/// falls inside any span in `suppressed_spans` (Complex Designator spans
/// the caller wants excluded, e.g. a capitalized run mistaken for a verb),
/// and skipping control verbs themselves: a control verb governing an
/// `xcomp` infinitive ("needs to drop") is promoted into the infinitive's
/// act as `control_verb` rather than getting an act of its own.
pub fn extract_acts(tokens: &[Token], arcs: &[Arc], interner: &Interner, suppressed_token_ids: &[usize]) -> Vec<Act> {
    let control_of: HashMap<usize, usize> = arcs
        .iter()
        .filter(|a| a.label == "xcomp")
        .filter(|a| tokens.iter().find(|t| t.id == a.head_id).map(|t| t.pos.is_verb()).unwrap_or(false))
        .map(|a| (a.dependent_id, a.head_id))
        .collect();

    tokens
        .iter()
        .filter(|t| t.pos.is_verb())
        .filter(|t| !suppressed_token_ids.contains(&t.id))
        .filter(|t| !control_of.values().any(|&head_id| head_id == t.id))
        .map(|verb| build_act(verb, tokens, arcs, interner, control_of.get(&verb.id).copied()))
        .collect()
}

fn build_act(verb: &Token, tokens: &[Token], arcs: &[Arc], interner: &Interner, control_head_id: Option<usize>) -> Act {
    let lemma = interner.resolve(verb.lemma).to_lowercase();
    let children: Vec<&Arc> = arcs.iter().filter(|a| a.head_id == verb.id).collect();

    let is_passive = children.iter().any(|a| a.label == "aux:pass" || a.label == "nsubj:pass");
    let is_copula = arcs.iter().any(|a| a.dependent_id == verb.id && a.label == "cop");
    let is_negated = children.iter().any(|a| {
        a.label == "neg"
            || tokens
                .iter()
                .find(|t| t.id == a.dependent_id)
                .map(|t| matches!(interner.resolve(t.text).to_lowercase().as_str(), "not" | "n't"))
                .unwrap_or(false)
    });

    let modal_word = children
        .iter()
        .filter(|a| a.label == "aux")
        .filter_map(|a| tokens.iter().find(|t| t.id == a.dependent_id))
        .find(|t| t.pos == PosTag::Modal)
        .map(|t| interner.resolve(t.text).to_lowercase());

    let control_lemma = control_head_id
        .and_then(|id| tokens.iter().find(|t| t.id == id))
        .map(|t| interner.resolve(t.lemma).to_lowercase());

    let modality =
        modal_word.as_deref().and_then(modality_for).or_else(|| control_lemma.as_deref().and_then(control_modal_for));
    let actuality = match modality {
        Some(Modality::Obligation) | Some(Modality::Prohibition) => Actuality::Prescribed,
        _ if has_conditional_marker(verb, tokens, arcs, interner) => Actuality::Hypothetical,
        _ => Actuality::Actual,
    };

    let verb_class = classify_verb(&lemma);
    let subject_is_inanimate = arcs
        .iter()
        .find(|a| a.head_id == verb.id && (a.label == "nsubj" || a.label == "nsubj:pass"))
        .and_then(|a| tokens.iter().find(|t| t.id == a.dependent_id))
        .map(|t| !t.pos.is_proper_noun() && t.pos != PosTag::Pronoun)
        .unwrap_or(false);

    let is_inference_verb = verb_class.map(|c| c.is_inference_verb(&lemma)).unwrap_or(false);
    let retyped_as_inference = is_inference_verb && subject_is_inanimate;

    let ontology_type = if is_copula {
        "StructuralAssertion".to_string()
    } else if retyped_as_inference {
        "InformationContentEntity".to_string()
    } else {
        verb_class.map(|c| c.ontology_type().to_string()).unwrap_or_else(|| "IntentionalAct".to_string())
    };

    Act {
        verb_token_id: verb.id,
        lemma,
        ontology_type,
        actuality,
        modality: modality.map(|m| format!("{:?}", m)),
        is_passive,
        is_negated,
        is_copula,
        retyped_as_inference,
        control_verb: control_lemma,
    }
}

const CONDITIONAL_MARKERS: &[&str] = &["if", "unless"];

/// A verb is hypothetical when it has a `mark` child spelled "if" or
/// "unless", the two conditional markers this pipeline recognizes.
fn has_conditional_marker(verb: &Token, tokens: &[Token], arcs: &[Arc], interner: &Interner) -> bool {
    arcs.iter()
        .filter(|a| a.head_id == verb.id && a.label == "mark")
        .filter_map(|a| tokens.iter().find(|t| t.id == a.dependent_id))
        .any(|t| CONDITIONAL_MARKERS.contains(&interner.resolve(t.text).to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag;
    use crate::tokenizer::tokenize;
    use std::collections::HashMap;

    fn arc(dep: usize, head: usize, label: &str) -> Arc {
        Arc { dependent_id: dep, head_id: head, label: label.to_string(), score_margin: 1.0 }
    }

    fn tokens_for(text: &str, verb_words: &[(&str, &str)], interner: &mut Interner) -> Vec<Token> {
        let raw = tokenize(text, interner);
        let mut weights = HashMap::new();
        for (word, tag_name) in verb_words {
            let mut w = HashMap::new();
            w.insert(tag_name.to_string(), 5.0);
            weights.insert(format!("w0={}", word.to_lowercase()), w);
        }
        let model = crate::models::PosModel { weights, tags: vec![] };
        tag(&raw, &model, interner)
    }

    #[test]
    fn obligation_modal_marks_act_prescribed() {
        let mut interner = Interner::new();
        // The=1 nurse=2 must=3 report=4 the=5 result=6
        let tokens = tokens_for("The nurse must report the result", &[("must", "MD"), ("report", "VB")], &mut interner);
        let arcs = vec![arc(2, 4, "nsubj"), arc(3, 4, "aux"), arc(6, 4, "obj")];
        let acts = extract_acts(&tokens, &arcs, &interner, &[]);
        let act = acts.iter().find(|a| a.verb_token_id == 4).unwrap();
        assert_eq!(act.actuality, Actuality::Prescribed);
        assert_eq!(act.modality.as_deref(), Some("Obligation"));
    }

    #[test]
    fn passive_auxiliary_marks_act_passive() {
        let mut interner = Interner::new();
        // The=1 patient=2 was=3 admitted=4 by=5 Smith=6
        let tokens = tokens_for("The patient was admitted by Smith", &[("admitted", "VBN")], &mut interner);
        let arcs = vec![arc(2, 4, "nsubj:pass"), arc(3, 4, "aux:pass"), arc(6, 4, "obl")];
        let acts = extract_acts(&tokens, &arcs, &interner, &[]);
        let act = acts.iter().find(|a| a.verb_token_id == 4).unwrap();
        assert!(act.is_passive);
    }

    #[test]
    fn negation_child_marks_act_negated() {
        let mut interner = Interner::new();
        // She=1 did=2 not=3 sign=4 the=5 form=6
        let tokens = tokens_for("She did not sign the form", &[("sign", "VB")], &mut interner);
        let arcs = vec![arc(1, 4, "nsubj"), arc(2, 4, "aux"), arc(3, 4, "neg"), arc(6, 4, "obj")];
        let acts = extract_acts(&tokens, &arcs, &interner, &[]);
        let act = acts.iter().find(|a| a.verb_token_id == 4).unwrap();
        assert!(act.is_negated);
    }

    #[test]
    fn copula_routes_to_structural_assertion() {
        let mut interner = Interner::new();
        // The=1 result=2 is=3 abnormal=4
        let tokens = tokens_for("The result is abnormal", &[("is", "VBZ")], &mut interner);
        let arcs = vec![arc(3, 4, "cop"), arc(2, 4, "nsubj")];
        let acts = extract_acts(&tokens, &arcs, &interner, &[]);
        let act = acts.iter().find(|a| a.verb_token_id == 3).unwrap();
        assert_eq!(act.ontology_type, "StructuralAssertion");
        assert!(act.is_copula);
    }

    #[test]
    fn control_verb_promotes_into_infinitive_act_with_inherited_modality() {
        let mut interner = Interner::new();
        // He=1 needs=2 to=3 drop=4 the=5 hand=6 gun=7
        let tokens =
            tokens_for("He needs to drop the hand gun", &[("needs", "VBZ"), ("drop", "VB")], &mut interner);
        let arcs = vec![arc(1, 2, "nsubj"), arc(3, 4, "mark"), arc(4, 2, "xcomp"), arc(7, 4, "obj")];
        let acts = extract_acts(&tokens, &arcs, &interner, &[]);
        assert_eq!(acts.len(), 1);
        let act = &acts[0];
        assert_eq!(act.verb_token_id, 4);
        assert_eq!(act.lemma, "drop");
        assert_eq!(act.control_verb.as_deref(), Some("need"));
        assert_eq!(act.modality.as_deref(), Some("Obligation"));
        assert_eq!(act.actuality, Actuality::Prescribed);
    }

    #[test]
    fn suppressed_token_ids_skip_that_verb() {
        let mut interner = Interner::new();
        let tokens = tokens_for("The nurse must report the result", &[("must", "MD"), ("report", "VB")], &mut interner);
        let arcs = vec![arc(2, 4, "nsubj"), arc(3, 4, "aux"), arc(6, 4, "obj")];
        let acts = extract_acts(&tokens, &arcs, &interner, &[4]);
        assert!(acts.iter().all(|a| a.verb_token_id != 4));
    }
}
