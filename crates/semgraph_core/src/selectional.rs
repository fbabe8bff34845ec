//! Selectional-preference glue: classifies each act's subject/object into
//! [`EntityCategory`] and checks them against its [`VerbClass`], surfacing
//! the resulting violations for ambiguity detection.

use crate::extract::{Act, Entity, Role};
use semgraph_base::Interner;
use semgraph_lexicon::{check_selectional_preferences, classify_entity_category, classify_verb, SelectionalViolation};

/// A selectional violation anchored back to the act and entity it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredViolation {
    pub act_verb_token_id: usize,
    pub entity_head_token_id: usize,
    pub violation: SelectionalViolation,
}

/// Checks every act's agent/patient roles against its verb class's
/// selectional preferences. Acts whose verb has no known class, or whose
/// role bearer's lemma yields no entity category, produce no violations —
/// absence of a classification is not itself a mismatch.
pub fn check_acts(acts: &[Act], entities: &[Entity], roles: &[Role], interner: &Interner) -> Vec<AnchoredViolation> {
    let mut out = Vec::new();

    for act in acts {
        let Some(class) = classify_verb(&act.lemma) else { continue };

        let agent = bearer_for(act, roles, "AgentRole");
        let patient = bearer_for(act, roles, "PatientRole");

        let agent_category = agent.and_then(|id| entity_category_for(id, entities, interner));
        let patient_category = patient.and_then(|id| entity_category_for(id, entities, interner));

        for violation in check_selectional_preferences(class, agent_category, patient_category) {
            let entity_head = match violation.kind {
                semgraph_lexicon::ViolationKind::AgentViolation => agent,
                semgraph_lexicon::ViolationKind::PatientViolation => patient,
            };
            if let Some(head) = entity_head {
                out.push(AnchoredViolation { act_verb_token_id: act.verb_token_id, entity_head_token_id: head, violation });
            }
        }
    }

    out
}

fn bearer_for(act: &Act, roles: &[Role], role_type: &str) -> Option<usize> {
    roles
        .iter()
        .find(|r| {
            r.role_type == role_type
                && (r.realized_in.contains(&act.verb_token_id) || r.would_be_realized_in.contains(&act.verb_token_id))
        })
        .map(|r| r.bearer_token_id)
}

fn entity_category_for(head_token_id: usize, entities: &[Entity], interner: &Interner) -> Option<semgraph_lexicon::EntityCategory> {
    let entity = entities.iter().find(|e| e.head_token_id == head_token_id)?;
    let _ = interner;
    classify_entity_category(&entity.head_lemma)
}
