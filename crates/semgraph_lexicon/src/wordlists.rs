//! Static word lists backing selectional-preference and denoted-type lookup.
//!
//! These are deliberately small, hand-curated lists rather than a full
//! lexical database: the pipeline falls back to morphological rules when a
//! lemma isn't covered, and a domain config can extend coverage further.

use crate::types::{EntityCategory, VerbClass};

const MENTAL_VERBS: &[&str] = &[
    "review", "read", "study", "analyze", "evaluate", "examine", "consider",
    "assess", "believe", "think", "know", "understand", "doubt", "wonder",
];
const PHYSICAL_VERBS: &[&str] = &[
    "carry", "build", "lift", "push", "pull", "move", "throw", "kick", "break",
];
const COMMUNICATION_VERBS: &[&str] = &[
    "say", "tell", "suggest", "indicate", "show", "imply", "demonstrate",
    "state", "report", "announce", "claim", "argue", "ask", "explain",
];
const TRANSFER_VERBS: &[&str] = &["give", "send", "hand", "offer", "award", "lend", "pass"];
const EMPLOYMENT_VERBS: &[&str] = &["hire", "employ", "promote", "fire", "dismiss", "appoint"];
const GOVERNANCE_VERBS: &[&str] = &["govern", "regulate", "administer", "oversee", "supervise", "manage"];
const CREATION_VERBS: &[&str] = &["write", "compose", "design", "draft", "construct", "paint"];
const PERCEPTION_VERBS: &[&str] = &["see", "hear", "notice", "observe", "watch", "spot"];
const STATIVE_VERBS: &[&str] = &["include", "contain", "have", "own", "possess", "comprise", "consist"];

/// Classifies a verb lemma into a [`VerbClass`] using the curated verb lists.
///
/// Returns `None` for verbs outside all curated lists; callers typically
/// fall back to `VerbClass::Stative` or skip selectional checking entirely.
pub fn classify_verb(lemma: &str) -> Option<VerbClass> {
    let lemma = lemma.to_lowercase();
    let lemma = lemma.as_str();
    if MENTAL_VERBS.contains(&lemma) {
        Some(VerbClass::Mental)
    } else if PHYSICAL_VERBS.contains(&lemma) {
        Some(VerbClass::Physical)
    } else if COMMUNICATION_VERBS.contains(&lemma) {
        Some(VerbClass::Communication)
    } else if TRANSFER_VERBS.contains(&lemma) {
        Some(VerbClass::Transfer)
    } else if EMPLOYMENT_VERBS.contains(&lemma) {
        Some(VerbClass::Employment)
    } else if GOVERNANCE_VERBS.contains(&lemma) {
        Some(VerbClass::Governance)
    } else if CREATION_VERBS.contains(&lemma) {
        Some(VerbClass::Creation)
    } else if PERCEPTION_VERBS.contains(&lemma) {
        Some(VerbClass::Perception)
    } else if STATIVE_VERBS.contains(&lemma) {
        Some(VerbClass::Stative)
    } else {
        None
    }
}

const PERSON_NOUNS: &[&str] = &[
    "doctor", "nurse", "patient", "man", "woman", "child", "person", "committee",
    "student", "teacher", "officer", "employee", "manager", "director", "clerk",
];
const ORGANIZATION_NOUNS: &[&str] = &[
    "hospital", "company", "firm", "committee", "agency", "department",
    "corporation", "university", "ministry", "board", "council",
];
const MATERIAL_NOUNS: &[&str] = &[
    "medication", "piano", "gun", "car", "book", "table", "file", "document",
    "building", "device", "drug",
];
const ABSTRACT_NOUNS: &[&str] = &[
    "diabetes", "freedom", "democracy", "policy", "condition", "concept", "idea",
];
const PROPOSITION_NOUNS: &[&str] = &["report", "finding", "claim", "statement", "conclusion", "result"];
const TEMPORAL_NOUNS: &[&str] = &["day", "days", "week", "weeks", "month", "months", "year", "years", "hour", "hours"];
const QUALITY_ADJECTIVES: &[&str] = &["severe", "mild", "acute", "chronic", "high", "low", "elevated"];

/// Classifies a noun lemma into a coarse [`EntityCategory`] for selectional
/// checking, using curated lists first and morphological fallbacks second.
///
/// Morphological fallbacks (per the agentive and nominalizing suffix
/// patterns): `-er`/`-or` endings suggest an animate agent noun; `-tion`,
/// `-ment`, `-ness`, `-ity` endings suggest an abstract nominalization.
pub fn classify_entity_category(lemma: &str) -> Option<EntityCategory> {
    let lemma = lemma.to_lowercase();
    let lemma = lemma.as_str();
    if PERSON_NOUNS.contains(&lemma) {
        return Some(EntityCategory::Animate);
    }
    if ORGANIZATION_NOUNS.contains(&lemma) {
        return Some(EntityCategory::Organization);
    }
    if MATERIAL_NOUNS.contains(&lemma) {
        return Some(EntityCategory::Material);
    }
    if ABSTRACT_NOUNS.contains(&lemma) {
        return Some(EntityCategory::Abstract);
    }
    if PROPOSITION_NOUNS.contains(&lemma) {
        return Some(EntityCategory::Proposition);
    }
    if TEMPORAL_NOUNS.contains(&lemma) {
        return Some(EntityCategory::Inanimate);
    }
    if lemma.ends_with("er") || lemma.ends_with("or") {
        return Some(EntityCategory::Animate);
    }
    if lemma.ends_with("tion") || lemma.ends_with("ment") || lemma.ends_with("ness") || lemma.ends_with("ity") {
        return Some(EntityCategory::Abstract);
    }
    None
}

/// Denoted-type tag assigned to an entity head noun, used by the tree entity
/// extractor before any gazetteer or pronoun-map lookup applies.
///
/// These are plain string tags (`"Person"`, `"Organization"`, `"Artifact"`,
/// `"Quality"`, `"TemporalRegion"`) rather than an enum, since the final
/// ontology type vocabulary is owned by the graph model, not the lexicon.
pub fn classify_denoted_type(lemma: &str) -> Option<&'static str> {
    let lemma = lemma.to_lowercase();
    let lemma = lemma.as_str();
    if PERSON_NOUNS.contains(&lemma) {
        Some("Person")
    } else if ORGANIZATION_NOUNS.contains(&lemma) {
        Some("Organization")
    } else if MATERIAL_NOUNS.contains(&lemma) {
        Some("Artifact")
    } else if QUALITY_ADJECTIVES.contains(&lemma) {
        Some("Quality")
    } else if TEMPORAL_NOUNS.contains(&lemma) {
        Some("TemporalRegion")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_mental_verb() {
        assert_eq!(classify_verb("review"), Some(VerbClass::Mental));
        assert_eq!(classify_verb("REVIEW"), Some(VerbClass::Mental));
    }

    #[test]
    fn classifies_inference_verb_as_communication() {
        assert_eq!(classify_verb("suggest"), Some(VerbClass::Communication));
    }

    #[test]
    fn unknown_verb_returns_none() {
        assert_eq!(classify_verb("xyzzy"), None);
    }

    #[test]
    fn classifies_person_noun_as_animate() {
        assert_eq!(classify_entity_category("doctor"), Some(EntityCategory::Animate));
    }

    #[test]
    fn morphological_fallback_detects_agentive_suffix() {
        assert_eq!(classify_entity_category("inspector"), Some(EntityCategory::Animate));
    }

    #[test]
    fn morphological_fallback_detects_nominalization_suffix() {
        assert_eq!(classify_entity_category("admission"), Some(EntityCategory::Abstract));
        assert_eq!(classify_entity_category("happiness"), Some(EntityCategory::Abstract));
    }

    #[test]
    fn temporal_nouns_classify_as_inanimate() {
        assert_eq!(classify_entity_category("weeks"), Some(EntityCategory::Inanimate));
    }

    #[test]
    fn denoted_type_for_person_noun() {
        assert_eq!(classify_denoted_type("nurse"), Some("Person"));
    }

    #[test]
    fn denoted_type_for_quality_adjective() {
        assert_eq!(classify_denoted_type("severe"), Some("Quality"));
    }

    #[test]
    fn denoted_type_unknown_returns_none() {
        assert_eq!(classify_denoted_type("xyzzy"), None);
    }
}
