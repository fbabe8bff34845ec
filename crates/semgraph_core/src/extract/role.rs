//! Tree Role Mapper: UD arc labels to participant roles, coordinated-conjunct
//! inheritance, and per-build role consolidation.

use crate::extract::act::Act;
use crate::extract::entity::Entity;
use crate::parser::Arc;
use crate::token::Token;
use semgraph_base::Interner;
use semgraph_lexicon::{classify_verb, VerbClass};
use std::collections::HashMap;

/// A participant role filled by an entity in an act, realized (or, for a
/// non-[`Actuality::Actual`](crate::extract::act::Actuality) act, only
/// would-be-realized) in that act.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub role_type: String,
    pub bearer_token_id: usize,
    /// Acts this role is realized in (consolidated: at most one `Role` per
    /// (bearer, role_type) pair per build, with all its realizing acts here).
    pub realized_in: Vec<usize>,
    pub would_be_realized_in: Vec<usize>,
    /// The UD dependency label this role was derived from (e.g. "nsubj",
    /// "obl") — the role's origin, kept alongside its typed role tag.
    pub ud_label: String,
    /// The governing preposition, for oblique roles only ("to", "with", …).
    pub preposition: Option<String>,
}

/// Maps each act's UD arguments to roles, following coordinated `conj`
/// chains so a conjunct inherits its coordinated sibling's role, then
/// consolidates to at most one [`Role`] per (bearer, role-type) pair.
pub fn map_roles(acts: &[Act], entities: &[Entity], tokens: &[Token], arcs: &[Arc], interner: &Interner) -> Vec<Role> {
    let mut consolidated: HashMap<(usize, String), Role> = HashMap::new();

    for act in acts {
        for (bearer_id, role_type, ud_label, preposition) in roles_for_act(act, tokens, arcs, interner) {
            if !entities.iter().any(|e| e.head_token_id == bearer_id) {
                continue;
            }
            let key = (bearer_id, role_type.clone());
            let entry = consolidated.entry(key).or_insert_with(|| Role {
                role_type: role_type.clone(),
                bearer_token_id: bearer_id,
                realized_in: Vec::new(),
                would_be_realized_in: Vec::new(),
                ud_label: ud_label.clone(),
                preposition: preposition.clone(),
            });
            use crate::extract::act::Actuality;
            match act.actuality {
                Actuality::Actual => {
                    if !entry.realized_in.contains(&act.verb_token_id) {
                        entry.realized_in.push(act.verb_token_id);
                    }
                }
                Actuality::Prescribed | Actuality::Hypothetical => {
                    if !entry.would_be_realized_in.contains(&act.verb_token_id) {
                        entry.would_be_realized_in.push(act.verb_token_id);
                    }
                }
            }
        }
    }

    let mut roles: Vec<Role> = consolidated.into_values().collect();
    roles.sort_by_key(|r| (r.bearer_token_id, r.role_type.clone()));
    roles
}

/// Roles for one act's UD arguments. A [`StructuralAssertion`](crate::extract::act::Act::ontology_type)
/// act has no Agent/Patient role nodes (I5) — stative verbs are asserted
/// relations, not intentional acts with participants.
fn roles_for_act(act: &Act, tokens: &[Token], arcs: &[Arc], interner: &Interner) -> Vec<(usize, String, String, Option<String>)> {
    if act.ontology_type == "StructuralAssertion" {
        return Vec::new();
    }

    let verb_id = act.verb_token_id;
    let mut out = Vec::new();

    for a in arcs.iter().filter(|a| a.head_id == verb_id) {
        if let Some((role_type, preposition)) = role_for_label(&a.label, act, a, tokens, arcs, interner) {
            out.push((a.dependent_id, role_type.clone(), a.label.clone(), preposition.clone()));
            for conjunct_id in coordinated_conjuncts(a.dependent_id, arcs) {
                out.push((conjunct_id, role_type.clone(), a.label.clone(), preposition.clone()));
            }
        }
    }
    out
}

fn role_for_label(
    label: &str,
    act: &Act,
    arc: &Arc,
    tokens: &[Token],
    arcs_all: &[Arc],
    interner: &Interner,
) -> Option<(String, Option<String>)> {
    match label {
        "nsubj" => Some(("AgentRole".to_string(), None)),
        "nsubj:pass" => Some(("PatientRole".to_string(), None)),
        "obj" => Some(("PatientRole".to_string(), None)),
        "iobj" => Some(("RecipientRole".to_string(), None)),
        "obl" => {
            let preposition = case_word_of(arc.dependent_id, arcs_all, tokens, interner);
            Some((oblique_role(act, arc, tokens, arcs_all, interner), preposition))
        }
        _ => None,
    }
}

fn oblique_role(act: &Act, arc: &Arc, tokens: &[Token], arcs_all: &[Arc], interner: &Interner) -> String {
    let case_word = case_word_of(arc.dependent_id, arcs_all, tokens, interner);
    if act.is_passive && case_word.as_deref() == Some("by") {
        return "AgentRole".to_string();
    }
    match case_word.as_deref() {
        Some("for") => "BeneficiaryRole".to_string(),
        Some("with") => {
            let object_is_animate = tokens
                .iter()
                .find(|t| t.id == arc.dependent_id)
                .map(|t| t.pos == crate::token::PosTag::Pronoun || t.pos.is_proper_noun())
                .unwrap_or(false);
            if object_is_animate { "ComitativeRole".to_string() } else { "InstrumentRole".to_string() }
        }
        Some("at") | Some("in") | Some("on") => "LocationRole".to_string(),
        Some("from") => "SourceRole".to_string(),
        // Dative "to" on a transfer verb ("gave the medication to the
        // patient") names the recipient, not a destination.
        Some("to") if classify_verb(&act.lemma) == Some(VerbClass::Transfer) => "RecipientRole".to_string(),
        Some("to") => "DestinationRole".to_string(),
        Some("about") => "TopicRole".to_string(),
        Some("against") => "OpponentRole".to_string(),
        _ => "ObliqueRole".to_string(),
    }
}

/// Finds the `case` child of an oblique dependent: the preposition
/// governing it, e.g. "by" in "admitted by Smith". Shared with
/// [`crate::extract::entity`] so an entity's `introducing_preposition` comes
/// from the same lookup instead of a second implementation.
pub(crate) fn case_word_of(obl_dependent_id: usize, arcs: &[Arc], tokens: &[Token], interner: &Interner) -> Option<String> {
    arcs.iter()
        .find(|a| a.head_id == obl_dependent_id && a.label == "case")
        .and_then(|a| tokens.iter().find(|t| t.id == a.dependent_id))
        .map(|t| interner.resolve(t.text).to_lowercase())
}

/// Walks the `conj` chain hanging off `head_id`, returning every token id
/// coordinated with it (so "the doctor and the nurse arrived" assigns
/// AgentRole to both).
fn coordinated_conjuncts(head_id: usize, arcs: &[Arc]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut frontier = vec![head_id];
    while let Some(current) = frontier.pop() {
        for a in arcs.iter().filter(|a| a.head_id == current && a.label == "conj") {
            out.push(a.dependent_id);
            frontier.push(a.dependent_id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::act::Actuality;

    fn entity(id: usize) -> Entity {
        Entity {
            head_token_id: id,
            head_lemma: "entity".to_string(),
            span_token_ids: vec![id],
            denoted_type: "Entity".to_string(),
            aliases: vec![],
            introducing_preposition: None,
            resolution_provenance: "none".to_string(),
        }
    }

    fn act(verb_id: usize, actuality: Actuality, is_passive: bool) -> Act {
        Act {
            verb_token_id: verb_id,
            lemma: "treat".to_string(),
            ontology_type: "IntentionalAct".to_string(),
            actuality,
            modality: None,
            is_passive,
            is_negated: false,
            is_copula: false,
            retyped_as_inference: false,
            control_verb: None,
        }
    }

    fn arc(dep: usize, head: usize, label: &str) -> Arc {
        Arc { dependent_id: dep, head_id: head, label: label.to_string(), score_margin: 1.0 }
    }

    #[test]
    fn subject_gets_agent_role_and_object_gets_patient_role() {
        let interner = Interner::new();
        let tokens: Vec<Token> = vec![];
        let acts = vec![act(3, Actuality::Actual, false)];
        let entities = vec![entity(1), entity(2)];
        let arcs = vec![arc(1, 3, "nsubj"), arc(2, 3, "obj")];
        let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);
        assert!(roles.iter().any(|r| r.bearer_token_id == 1 && r.role_type == "AgentRole"));
        assert!(roles.iter().any(|r| r.bearer_token_id == 2 && r.role_type == "PatientRole"));
    }

    #[test]
    fn coordinated_subject_inherits_agent_role() {
        let interner = Interner::new();
        let tokens: Vec<Token> = vec![];
        let acts = vec![act(5, Actuality::Actual, false)];
        let entities = vec![entity(1), entity(3)];
        let arcs = vec![arc(1, 5, "nsubj"), arc(3, 1, "conj")];
        let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);
        assert!(roles.iter().any(|r| r.bearer_token_id == 3 && r.role_type == "AgentRole"));
    }

    #[test]
    fn prescribed_act_fills_would_be_realized_in_not_realized_in() {
        let interner = Interner::new();
        let tokens: Vec<Token> = vec![];
        let acts = vec![act(3, Actuality::Prescribed, false)];
        let entities = vec![entity(1)];
        let arcs = vec![arc(1, 3, "nsubj")];
        let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);
        let role = roles.iter().find(|r| r.bearer_token_id == 1).unwrap();
        assert!(role.realized_in.is_empty());
        assert_eq!(role.would_be_realized_in, vec![3]);
    }

    #[test]
    fn passive_obl_with_by_case_gets_agent_role() {
        let mut interner = Interner::new();
        let by_text = interner.intern("by");
        let tokens: Vec<Token> = vec![];
        let smith = entity(6);
        let acts = vec![act(4, Actuality::Actual, true)];
        let arcs = vec![arc(6, 4, "obl"), arc(5, 6, "case")];
        let mut tokens_with_by = tokens.clone();
        tokens_with_by.push(Token {
            id: 5,
            text: by_text,
            lemma: by_text,
            pos: crate::token::PosTag::Preposition,
            span: semgraph_base::Span::new(0, 0),
        });
        let roles = map_roles(&acts, &[smith], &tokens_with_by, &arcs, &interner);
        assert!(roles.iter().any(|r| r.bearer_token_id == 6 && r.role_type == "AgentRole"));
    }

    #[test]
    fn dative_to_on_transfer_verb_gets_recipient_not_destination() {
        let mut interner = Interner::new();
        let to_text = interner.intern("to");
        let give_act = Act {
            verb_token_id: 2,
            lemma: "give".to_string(),
            ontology_type: "IntentionalAct".to_string(),
            actuality: Actuality::Actual,
            modality: None,
            is_passive: false,
            is_negated: false,
            is_copula: false,
            retyped_as_inference: false,
            control_verb: None,
        };
        let patient_entity = entity(6);
        let arcs = vec![arc(6, 2, "obl"), arc(5, 6, "case")];
        let tokens = vec![Token {
            id: 5,
            text: to_text,
            lemma: to_text,
            pos: crate::token::PosTag::Preposition,
            span: semgraph_base::Span::new(0, 0),
        }];
        let roles = map_roles(&[give_act], &[patient_entity], &tokens, &arcs, &interner);
        assert!(roles.iter().any(|r| r.bearer_token_id == 6 && r.role_type == "RecipientRole"));
    }

    #[test]
    fn stative_act_has_no_agent_or_patient_role() {
        let interner = Interner::new();
        let tokens: Vec<Token> = vec![];
        let mut stative_act = act(3, Actuality::Actual, false);
        stative_act.ontology_type = "StructuralAssertion".to_string();
        let entities = vec![entity(1), entity(2)];
        let arcs = vec![arc(1, 3, "nsubj"), arc(2, 3, "obj")];
        let roles = map_roles(&[stative_act], &entities, &tokens, &arcs, &interner);
        assert!(roles.is_empty());
    }

    #[test]
    fn oblique_role_carries_ud_label_and_preposition() {
        let mut interner = Interner::new();
        let to_text = interner.intern("to");
        let mut give_act = act(2, Actuality::Actual, false);
        give_act.lemma = "give".to_string();
        let patient_entity = entity(6);
        let arcs = vec![arc(6, 2, "obl"), arc(5, 6, "case")];
        let tokens = vec![Token {
            id: 5,
            text: to_text,
            lemma: to_text,
            pos: crate::token::PosTag::Preposition,
            span: semgraph_base::Span::new(0, 0),
        }];
        let roles = map_roles(&[give_act], &[patient_entity], &tokens, &arcs, &interner);
        let role = roles.iter().find(|r| r.bearer_token_id == 6).unwrap();
        assert_eq!(role.ud_label, "obl");
        assert_eq!(role.preposition.as_deref(), Some("to"));
    }

    #[test]
    fn role_consolidates_across_multiple_realizing_acts() {
        let interner = Interner::new();
        let tokens: Vec<Token> = vec![];
        let acts = vec![act(3, Actuality::Actual, false), act(4, Actuality::Actual, false)];
        let entities = vec![entity(1)];
        let arcs = vec![arc(1, 3, "nsubj"), arc(1, 4, "nsubj")];
        let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].realized_in.len(), 2);
    }
}
