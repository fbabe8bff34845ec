//! Tree Entity Extractor: mints an entity per nominal argument head and
//! assigns it a denoted type through the gazetteer → lexicon → pronoun-map
//! → verb-refinement cascade.

use crate::dep_tree::DepTree;
use crate::extract::role::case_word_of;
use crate::parser::Arc;
use crate::token::{PosTag, Token};
use semgraph_base::Interner;
use semgraph_lexicon::{classify_denoted_type, classify_verb, Gazetteer, GazetteerMatchKind, VerbClass};

/// UD dependency labels that mark a nominal argument position.
const NOMINAL_ARG_LABELS: &[&str] = &["nsubj", "obj", "iobj", "obl", "nmod", "conj"];

/// One extracted entity: its head token, the contiguous span it spans once
/// clause boundaries are trimmed, its denoted type, and any aliases picked
/// up from appositions.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub head_token_id: usize,
    pub head_lemma: String,
    pub span_token_ids: Vec<usize>,
    pub denoted_type: String,
    pub aliases: Vec<String>,
    /// The preposition introducing this entity when it sits in an oblique
    /// argument position ("to" in "gave the medication to the patient").
    pub introducing_preposition: Option<String>,
    /// How the denoted type was resolved against the gazetteer:
    /// "exact"/"alias"/"normalized" on a match, "none" otherwise.
    pub resolution_provenance: String,
}

const PERSON_PRONOUNS: &[&str] = &["he", "she", "him", "her"];

/// Extracts one entity per nominal-argument head in `tokens`: every
/// `nsubj`/`obj`/`iobj`/`obl`/`nmod`/`conj` dependent, plus the dep tree's
/// root when it is itself nominal.
pub fn extract_entities(
    tokens: &[Token],
    tree: &DepTree,
    arcs: &[Arc],
    interner: &Interner,
    gazetteer: &Gazetteer,
) -> Vec<Entity> {
    let mut heads: Vec<usize> = arcs
        .iter()
        .filter(|a| NOMINAL_ARG_LABELS.contains(&a.label.as_str()))
        .map(|a| a.dependent_id)
        .collect();

    for root_id in tree.roots() {
        if let Some(tok) = tokens.iter().find(|t| t.id == root_id) {
            if tok.pos.is_nominal() {
                heads.push(root_id);
            }
        }
    }
    heads.sort_unstable();
    heads.dedup();

    heads
        .into_iter()
        .filter_map(|head_id| {
            let head_token = tokens.iter().find(|t| t.id == head_id)?;
            if !head_token.pos.is_nominal() {
                return None;
            }
            Some(build_entity(head_token, tokens, tree, arcs, interner, gazetteer))
        })
        .collect()
}

fn build_entity(
    head: &Token,
    tokens: &[Token],
    tree: &DepTree,
    arcs: &[Arc],
    interner: &Interner,
    gazetteer: &Gazetteer,
) -> Entity {
    let span_token_ids = tree.entity_subtree(head.id);
    let head_text = interner.resolve(head.text);
    let lemma = interner.resolve(head.lemma).to_lowercase();
    let span_text = span_token_ids
        .iter()
        .filter_map(|id| tokens.iter().find(|t| t.id == *id))
        .map(|t| interner.resolve(t.text))
        .collect::<Vec<_>>()
        .join(" ");

    let (denoted_type, resolution_provenance) =
        assign_denoted_type(head, &lemma, head_text, &span_text, tokens, arcs, interner, gazetteer);

    let introducing_preposition = case_word_of(head.id, arcs, tokens, interner);

    let aliases = tree
        .appositions(head.id)
        .into_iter()
        .map(|appos_id| {
            tree.entity_subtree(appos_id)
                .into_iter()
                .filter_map(|id| tokens.iter().find(|t| t.id == id))
                .filter(|t| t.pos != PosTag::Punctuation)
                .map(|t| interner.resolve(t.text))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Entity {
        head_token_id: head.id,
        head_lemma: lemma.to_string(),
        span_token_ids,
        denoted_type,
        aliases,
        introducing_preposition,
        resolution_provenance,
    }
}

/// Resolves a head's denoted type, returning both the type and how it was
/// resolved: a gazetteer hit reports which tier of the lookup matched
/// (exact canonical, exact alias, normalized); any other path reports
/// "none" since no gazetteer entry backs the assignment.
fn assign_denoted_type(
    head: &Token,
    lemma: &str,
    head_text: &str,
    span_text: &str,
    tokens: &[Token],
    arcs: &[Arc],
    interner: &Interner,
    gazetteer: &Gazetteer,
) -> (String, String) {
    if let Some((entry, kind)) = gazetteer.lookup(span_text).or_else(|| gazetteer.lookup(head_text)) {
        let provenance = match kind {
            GazetteerMatchKind::ExactCanonical => "exact",
            GazetteerMatchKind::ExactAlias => "alias",
            GazetteerMatchKind::Normalized => "normalized",
        };
        return (entry.entity_type.clone(), provenance.to_string());
    }

    let mut denoted = classify_denoted_type(lemma).map(str::to_string);

    if denoted.is_none() && head.pos == PosTag::Pronoun {
        let word = interner.resolve(head.text).to_lowercase();
        denoted = Some(
            if PERSON_PRONOUNS.contains(&word.as_str()) {
                "Person"
            } else if word == "it" {
                "IndependentContinuant"
            } else if word == "they" {
                "ObjectAggregate"
            } else {
                "Entity"
            }
            .to_string(),
        );
    }
    if denoted.is_none() && matches!(interner.resolve(head.text).to_lowercase().as_str(), "this" | "that") {
        denoted = Some("Entity".to_string());
    }

    denoted = refine_by_governing_verb(denoted, head, arcs, tokens, interner);

    (denoted.unwrap_or_else(|| "Entity".to_string()), "none".to_string())
}

/// Refines an ambiguous/default denoted type using the verb governing this
/// entity's argument arc: a cognitive/evaluative verb promotes an ambiguous
/// object to `InformationContentEntity`; a physical verb leaves an already
/// assigned `Artifact` untouched.
fn refine_by_governing_verb(
    denoted: Option<String>,
    head: &Token,
    arcs: &[Arc],
    tokens: &[Token],
    interner: &Interner,
) -> Option<String> {
    let governing_verb = arcs
        .iter()
        .find(|a| a.dependent_id == head.id)
        .and_then(|a| tokens.iter().find(|t| t.id == a.head_id))
        .filter(|t| t.pos.is_verb());

    let Some(verb) = governing_verb else { return denoted };
    let verb_lemma = interner.resolve(verb.lemma).to_lowercase();

    match (denoted, classify_verb(&verb_lemma)) {
        (None, Some(VerbClass::Mental)) => Some("InformationContentEntity".to_string()),
        (other, _) => other,
    }
}
