//! Scenario tests: the example sentences worked through by hand-built
//! dependency arcs, exercising entity/act/role extraction together the way
//! a caller's sentence would actually flow through them. Arcs are
//! hand-constructed rather than produced by the real parser, since the
//! arc-eager model has no trained weights in this workspace and would not
//! reliably reproduce a specific Universal Dependencies tree.

use semgraph_core::dep_tree::DepTree;
use semgraph_core::extract::act::Actuality;
use semgraph_core::extract::{extract_acts, extract_entities, map_roles};
use semgraph_core::models::PosModel;
use semgraph_core::parser::Arc;
use semgraph_core::selectional::check_acts;
use semgraph_core::tagger::tag;
use semgraph_core::token::Token;
use semgraph_core::tokenizer::tokenize;
use semgraph_base::Interner;
use semgraph_lexicon::Gazetteer;
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
    let model = PosModel { weights, tags: vec![] };
    tag(&raw, &model, interner)
}

/// S1: "The doctor treated the patient." A plain transitive act: the
/// subject is the agent, the object the patient, both persons, act actual.
#[test]
fn s1_transitive_act_fills_agent_and_patient_roles() {
    let mut interner = Interner::new();
    // The=1 doctor=2 treated=3 the=4 patient=5
    let tokens = tokens_for("The doctor treated the patient", &[("treated", "VBD")], &mut interner);
    let arcs = vec![arc(2, 3, "nsubj"), arc(5, 3, "obj")];
    let tree = DepTree::new(arcs.clone());
    let gaz = Gazetteer::new();

    let entities = extract_entities(&tokens, &tree, &arcs, &interner, &gaz);
    let acts = extract_acts(&tokens, &arcs, &interner, &[]);
    let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);

    assert_eq!(acts.len(), 1);
    let act = &acts[0];
    assert_eq!(act.actuality, Actuality::Actual);
    assert_eq!(act.ontology_type, "IntentionalAct");

    let doctor = entities.iter().find(|e| e.head_token_id == 2).unwrap();
    let patient = entities.iter().find(|e| e.head_token_id == 5).unwrap();
    assert_eq!(doctor.denoted_type, "Person");
    assert_eq!(patient.denoted_type, "Person");

    assert!(roles.iter().any(|r| r.bearer_token_id == 2 && r.role_type == "AgentRole" && r.realized_in == vec![3]));
    assert!(roles.iter().any(|r| r.bearer_token_id == 5 && r.role_type == "PatientRole" && r.realized_in == vec![3]));
}

/// S2: "The doctor must treat the patient." A modal obligation: the act is
/// prescribed, not actual, so its roles land in `would_be_realized_in`.
#[test]
fn s2_modal_obligation_fills_would_be_realized_in() {
    let mut interner = Interner::new();
    // The=1 doctor=2 must=3 treat=4 the=5 patient=6
    let tokens = tokens_for("The doctor must treat the patient", &[("must", "MD"), ("treat", "VB")], &mut interner);
    let arcs = vec![arc(2, 4, "nsubj"), arc(3, 4, "aux"), arc(6, 4, "obj")];
    let tree = DepTree::new(arcs.clone());
    let gaz = Gazetteer::new();

    let entities = extract_entities(&tokens, &tree, &arcs, &interner, &gaz);
    let acts = extract_acts(&tokens, &arcs, &interner, &[]);
    let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);

    let act = acts.iter().find(|a| a.verb_token_id == 4).unwrap();
    assert_eq!(act.actuality, Actuality::Prescribed);
    assert_eq!(act.modality.as_deref(), Some("Obligation"));

    let agent_role = roles.iter().find(|r| r.bearer_token_id == 2 && r.role_type == "AgentRole").unwrap();
    assert!(agent_role.realized_in.is_empty());
    assert_eq!(agent_role.would_be_realized_in, vec![4]);
}

/// S3: "The report was reviewed by the auditor." Passive voice: the
/// surface object is the patient, the `obl` "by"-phrase is the agent.
#[test]
fn s3_passive_voice_recovers_agent_from_by_phrase() {
    let mut interner = Interner::new();
    // The=1 report=2 was=3 reviewed=4 by=5 the=6 auditor=7
    let tokens = tokens_for("The report was reviewed by the auditor", &[("reviewed", "VBN")], &mut interner);
    let arcs = vec![arc(2, 4, "nsubj:pass"), arc(3, 4, "aux:pass"), arc(7, 4, "obl"), arc(5, 7, "case")];
    let tree = DepTree::new(arcs.clone());
    let gaz = Gazetteer::new();

    let entities = extract_entities(&tokens, &tree, &arcs, &interner, &gaz);
    let acts = extract_acts(&tokens, &arcs, &interner, &[]);
    let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);

    let act = acts.iter().find(|a| a.verb_token_id == 4).unwrap();
    assert!(act.is_passive);

    assert!(roles.iter().any(|r| r.bearer_token_id == 2 && r.role_type == "PatientRole"));
    assert!(roles.iter().any(|r| r.bearer_token_id == 7 && r.role_type == "AgentRole"));

    // The auditor's entity still exists independently of role mapping.
    assert!(entities.iter().any(|e| e.head_token_id == 7));
}

/// S4: "The nurse gave the medication to the patient." A ditransitive
/// Transfer verb: the dative "to"-phrase names the recipient, not a
/// destination.
#[test]
fn s4_dative_to_on_transfer_verb_yields_recipient_role() {
    let mut interner = Interner::new();
    // The=1 nurse=2 gave=3 the=4 medication=5 to=6 the=7 patient=8
    let mut tokens = tokens_for("The nurse gave the medication to the patient", &[("gave", "VBD")], &mut interner);
    let arcs = vec![arc(2, 3, "nsubj"), arc(5, 3, "obj"), arc(8, 3, "obl"), arc(6, 8, "case")];

    // "gave" only lemmatizes to "give" through irregular-verb handling the
    // tagger doesn't carry; force the lemma directly so classify_verb sees
    // the right surface form regardless of tagger lemmatization rules.
    let give_lemma = interner.intern("give");
    if let Some(t) = tokens.iter_mut().find(|t| t.id == 3) {
        t.lemma = give_lemma;
    }

    let tree = DepTree::new(arcs.clone());
    let gaz = Gazetteer::new();
    let entities = extract_entities(&tokens, &tree, &arcs, &interner, &gaz);
    let acts = extract_acts(&tokens, &arcs, &interner, &[]);
    let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);

    assert!(roles.iter().any(|r| r.bearer_token_id == 8 && r.role_type == "RecipientRole"));
    assert!(!roles.iter().any(|r| r.bearer_token_id == 8 && r.role_type == "DestinationRole"));
}

/// S6: "Blood sugar levels suggest diabetes." An inanimate subject driving
/// an inference verb retypes the act to an information-content node rather
/// than an intentional act.
#[test]
fn s6_inanimate_subject_of_inference_verb_retypes_act() {
    let mut interner = Interner::new();
    // Blood=1 sugar=2 levels=3 suggest=4 diabetes=5
    let tokens = tokens_for("Blood sugar levels suggest diabetes", &[("suggest", "VBP")], &mut interner);
    let arcs = vec![arc(3, 4, "nsubj"), arc(5, 4, "obj")];
    let tree = DepTree::new(arcs.clone());
    let gaz = Gazetteer::new();

    let entities = extract_entities(&tokens, &tree, &arcs, &interner, &gaz);
    let acts = extract_acts(&tokens, &arcs, &interner, &[]);
    let _roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);

    let act = acts.iter().find(|a| a.verb_token_id == 4).unwrap();
    assert!(act.retyped_as_inference);
    assert_eq!(act.ontology_type, "InformationContentEntity");
}

/// S7: "He needs to drop the hand gun." The control verb "needs" does not
/// get its own act; it promotes into the infinitive's act as `control_verb`
/// and lends its obligation modality.
#[test]
fn s7_control_verb_promotes_into_infinitive_act() {
    let mut interner = Interner::new();
    // He=1 needs=2 to=3 drop=4 the=5 hand=6 gun=7
    let tokens = tokens_for("He needs to drop the hand gun", &[("needs", "VBZ"), ("drop", "VB")], &mut interner);
    let arcs = vec![arc(1, 2, "nsubj"), arc(3, 4, "mark"), arc(4, 2, "xcomp"), arc(7, 4, "obj")];
    let tree = DepTree::new(arcs.clone());
    let gaz = Gazetteer::new();

    let entities = extract_entities(&tokens, &tree, &arcs, &interner, &gaz);
    let acts = extract_acts(&tokens, &arcs, &interner, &[]);
    let roles = map_roles(&acts, &entities, &tokens, &arcs, &interner);

    assert_eq!(acts.len(), 1);
    let act = &acts[0];
    assert_eq!(act.verb_token_id, 4);
    assert_eq!(act.control_verb.as_deref(), Some("need"));
    assert_eq!(act.modality.as_deref(), Some("Obligation"));
    assert_eq!(act.actuality, Actuality::Prescribed);

    assert!(roles.iter().any(|r| r.bearer_token_id == 1 && r.role_type == "AgentRole"));

    // Selectional preferences still run against the promoted act.
    let violations = check_acts(&acts, &entities, &roles, &interner);
    assert!(violations.is_empty());
}
