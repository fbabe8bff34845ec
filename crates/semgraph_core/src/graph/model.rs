//! Graph model: node shape, relation edges, and IRI minting.
//!
//! Node identity is content-derived rather than sequential: an IRI encodes
//! the node's type tag and a hash of its grounding text, so two builds over
//! the same input mint the same IRIs (determinism, P1) and duplicate nodes
//! naturally merge on insert.

use semgraph_base::content_hash12;
use std::collections::BTreeMap;

/// Mints an IRI of the form `<namespace>:<TypeTag>_<CleanText>_<hash12>`.
///
/// `clean_text` should already be stripped of punctuation and spaces
/// collapsed to underscores; this function does not normalize it further,
/// since callers assemble it differently per node kind (entity head word,
/// verb lemma, relation name, ...).
pub fn mint_iri(namespace: &str, type_tag: &str, clean_text: &str, hash_parts: &[&str]) -> String {
    let hash = content_hash12(hash_parts);
    format!("{}:{}_{}_{}", namespace, type_tag, clean_text, hash)
}

/// Lowercases, strips non-alphanumeric characters, and joins words with
/// underscores — the `CleanText` segment of a minted IRI.
pub fn clean_text_segment(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// A graph node: an `@id`, one or more `@type` tags, and relation/attribute
/// properties. Properties are a flat string-keyed map; multi-valued
/// properties (e.g. `realized_in`) are encoded as a joined list under one
/// key rather than a nested structure, matching the flat JSON-LD-ish shape
/// the rest of the pipeline serializes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub types: Vec<String>,
    pub properties: BTreeMap<String, PropertyValue>,
}

/// The value side of a node property: a single related IRI, a list of
/// related IRIs, or a literal string/flag.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Iri(String),
    IriList(Vec<String>),
    Literal(String),
    Flag(bool),
}

impl Node {
    pub fn new(id: impl Into<String>, types: Vec<String>) -> Self {
        Node { id: id.into(), types, properties: BTreeMap::new() }
    }

    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    pub fn has_type(&self, type_tag: &str) -> bool {
        self.types.iter().any(|t| t == type_tag)
    }

    /// Merges `other` into `self` by IRI: scalar fields are last-writer-wins
    /// (other's value replaces self's), `IriList` fields concatenate and
    /// dedupe. Types union.
    pub fn merge_from(&mut self, other: &Node) {
        for t in &other.types {
            if !self.types.contains(t) {
                self.types.push(t.clone());
            }
        }
        for (key, value) in &other.properties {
            match (self.properties.get_mut(key), value) {
                (Some(PropertyValue::IriList(existing)), PropertyValue::IriList(incoming)) => {
                    for iri in incoming {
                        if !existing.contains(iri) {
                            existing.push(iri.clone());
                        }
                    }
                }
                _ => {
                    self.properties.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_iri_is_deterministic() {
        let a = mint_iri("inst", "Person", "Doctor", &["doctor", "Person"]);
        let b = mint_iri("inst", "Person", "Doctor", &["doctor", "Person"]);
        assert_eq!(a, b);
    }

    #[test]
    fn clean_text_segment_strips_punctuation_and_joins() {
        assert_eq!(clean_text_segment("Dr. Smith's report"), "Dr_Smith_s_report");
    }

    #[test]
    fn merge_from_concatenates_iri_lists_without_duplicates() {
        let mut a = Node::new("inst:Role_1", vec!["AgentRole".to_string()]);
        a.set("realized_in", PropertyValue::IriList(vec!["inst:Act_1".to_string()]));
        let mut b = Node::new("inst:Role_1", vec!["AgentRole".to_string()]);
        b.set("realized_in", PropertyValue::IriList(vec!["inst:Act_1".to_string(), "inst:Act_2".to_string()]));
        a.merge_from(&b);
        match &a.properties["realized_in"] {
            PropertyValue::IriList(list) => assert_eq!(list, &vec!["inst:Act_1".to_string(), "inst:Act_2".to_string()]),
            _ => panic!("expected IriList"),
        }
    }

    #[test]
    fn merge_from_replaces_scalar_fields_last_writer_wins() {
        let mut a = Node::new("inst:Entity_1", vec!["Person".to_string()]);
        a.set("label", PropertyValue::Literal("Doctor".to_string()));
        let mut b = Node::new("inst:Entity_1", vec!["Person".to_string()]);
        b.set("label", PropertyValue::Literal("Dr. Smith".to_string()));
        a.merge_from(&b);
        assert_eq!(a.properties["label"], PropertyValue::Literal("Dr. Smith".to_string()));
    }
}
