//! Selectional-preference vocabulary: verb classes and entity categories.
//!
//! These types back the verb-class/entity-category lexicon used by the
//! dependency-tree extractors to retype agents and patients (e.g. an
//! inanimate subject of an inference verb becomes an `InformationContentEntity`
//! rather than an `IntentionalAct` participant) and to flag selectional
//! violations that feed ambiguity detection.

use std::fmt;

/// A coarse verb class used to determine what an act's subject and object
/// are expected to denote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// Cognitive/evaluative verbs: review, read, study, analyze, evaluate, examine.
    Mental,
    /// Verbs of physical manipulation: carry, build, lift, push.
    Physical,
    /// Verbs of speech and inference: suggest, indicate, show, imply, tell.
    Communication,
    /// Ditransitive transfer verbs: give, send, hand, offer, award.
    Transfer,
    /// Verbs of hiring and employment relations: hire, employ, promote, fire.
    Employment,
    /// Verbs of institutional control: govern, regulate, administer, oversee.
    Governance,
    /// Verbs that bring an artifact or work into existence: build, write, compose.
    Creation,
    /// Verbs of perception: see, hear, notice, observe.
    Perception,
    /// Verbs that assert a standing relation rather than an event: include, contain, have.
    Stative,
}

impl VerbClass {
    /// The ontology type an act of this class denotes.
    ///
    /// Most classes denote an `IntentionalAct`; `Stative` denotes no act at
    /// all (the sentence-mode classifier routes it to a `StructuralAssertion`
    /// instead).
    pub fn ontology_type(self) -> &'static str {
        match self {
            VerbClass::Stative => "StructuralAssertion",
            _ => "IntentionalAct",
        }
    }

    /// Entity categories an agent/subject of this verb class is expected to fall into.
    pub fn subject_categories(self) -> &'static [EntityCategory] {
        match self {
            VerbClass::Mental | VerbClass::Perception => &[EntityCategory::Animate],
            VerbClass::Physical => &[EntityCategory::Animate, EntityCategory::Organization],
            VerbClass::Communication => &[
                EntityCategory::Animate,
                EntityCategory::Organization,
                EntityCategory::Inanimate,
            ],
            VerbClass::Transfer | VerbClass::Employment => {
                &[EntityCategory::Animate, EntityCategory::Organization]
            }
            VerbClass::Governance => &[EntityCategory::Organization, EntityCategory::Animate],
            VerbClass::Creation => &[EntityCategory::Animate, EntityCategory::Organization],
            VerbClass::Stative => &[
                EntityCategory::Animate,
                EntityCategory::Organization,
                EntityCategory::Material,
                EntityCategory::Abstract,
                EntityCategory::Inanimate,
            ],
        }
    }

    /// Entity categories a patient/object of this verb class is expected to fall into.
    pub fn object_categories(self) -> &'static [EntityCategory] {
        match self {
            VerbClass::Mental => &[
                EntityCategory::Abstract,
                EntityCategory::Proposition,
                EntityCategory::Material,
            ],
            VerbClass::Physical => &[EntityCategory::Material],
            VerbClass::Communication => &[
                EntityCategory::Proposition,
                EntityCategory::Abstract,
                EntityCategory::Animate,
            ],
            VerbClass::Transfer => &[EntityCategory::Material, EntityCategory::Abstract],
            VerbClass::Employment => &[EntityCategory::Animate],
            VerbClass::Governance => &[
                EntityCategory::Organization,
                EntityCategory::Animate,
                EntityCategory::Abstract,
            ],
            VerbClass::Creation => &[EntityCategory::Material, EntityCategory::Abstract],
            VerbClass::Perception => &[
                EntityCategory::Material,
                EntityCategory::Animate,
                EntityCategory::Abstract,
            ],
            VerbClass::Stative => &[
                EntityCategory::Animate,
                EntityCategory::Organization,
                EntityCategory::Material,
                EntityCategory::Abstract,
                EntityCategory::Inanimate,
            ],
        }
    }

    /// Returns `true` for the handful of `Communication`-class verbs whose
    /// subject is routinely inanimate ("Blood sugar levels suggest
    /// diabetes"). The extractor emits an `InformationContentEntity` in
    /// place of an act when this fires.
    pub fn is_inference_verb(self, lemma: &str) -> bool {
        self == VerbClass::Communication
            && matches!(lemma, "suggest" | "indicate" | "show" | "imply" | "demonstrate")
    }
}

/// Coarse semantic category of a noun's denotation, used only to check
/// selectional preferences (not the final ontology type of the entity node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    /// Persons and other agentive living beings: doctor, nurse, dog.
    Animate,
    /// Institutions capable of acting collectively: committee, hospital, firm.
    Organization,
    /// Concrete physical objects: medication, handgun, piano.
    Material,
    /// Non-physical conceptual entities: diabetes, freedom, democracy.
    Abstract,
    /// Propositional/informational content: report, finding, claim.
    Proposition,
    /// Concrete but non-agentive and non-material (temporal regions, etc.).
    Inanimate,
}

impl EntityCategory {
    /// Returns `true` if an entity of `self` can satisfy a verb slot that
    /// requires one of `required`.
    ///
    /// Organizations act as agents wherever animacy is required (a
    /// committee can "review" a report); propositions subsume under
    /// abstractness wherever abstractness is required. Every other pairing
    /// requires an exact category match.
    pub fn satisfies(self, required: &[EntityCategory]) -> bool {
        if required.contains(&self) {
            return true;
        }
        match self {
            EntityCategory::Organization => required.contains(&EntityCategory::Animate),
            EntityCategory::Proposition => required.contains(&EntityCategory::Abstract),
            _ => false,
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityCategory::Animate => "animate",
            EntityCategory::Organization => "organization",
            EntityCategory::Material => "material",
            EntityCategory::Abstract => "abstract",
            EntityCategory::Proposition => "proposition",
            EntityCategory::Inanimate => "inanimate",
        };
        f.write_str(label)
    }
}

/// Which argument slot a selectional violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The subject does not satisfy the verb class's subject categories.
    AgentViolation,
    /// The object does not satisfy the verb class's object categories.
    PatientViolation,
}

/// A single selectional-preference mismatch, reported for ambiguity detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionalViolation {
    pub kind: ViolationKind,
    /// A short machine-readable signal name, e.g. "mental-verb-material-subject".
    pub signal: String,
    pub required: Vec<EntityCategory>,
    pub observed: EntityCategory,
}

/// Checks whether `subject_category` and `object_category` satisfy `class`'s
/// selectional preferences, returning any violations found.
///
/// `object_category` is `None` for intransitive or object-less acts, in
/// which case no patient violation can be reported.
pub fn check_selectional_preferences(
    class: VerbClass,
    subject_category: Option<EntityCategory>,
    object_category: Option<EntityCategory>,
) -> Vec<SelectionalViolation> {
    let mut violations = Vec::new();
    if let Some(subj) = subject_category {
        let required = class.subject_categories();
        if !subj.satisfies(required) {
            violations.push(SelectionalViolation {
                kind: ViolationKind::AgentViolation,
                signal: format!("{:?}-verb-{}-subject", class, subj).to_lowercase(),
                required: required.to_vec(),
                observed: subj,
            });
        }
    }
    if let Some(obj) = object_category {
        let required = class.object_categories();
        if !obj.satisfies(required) {
            violations.push(SelectionalViolation {
                kind: ViolationKind::PatientViolation,
                signal: format!("{:?}-verb-{}-object", class, obj).to_lowercase(),
                required: required.to_vec(),
                observed: obj,
            });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stative_verbs_denote_no_act() {
        assert_eq!(VerbClass::Stative.ontology_type(), "StructuralAssertion");
        assert_eq!(VerbClass::Mental.ontology_type(), "IntentionalAct");
    }

    #[test]
    fn organization_satisfies_animate_requirement() {
        assert!(EntityCategory::Organization.satisfies(&[EntityCategory::Animate]));
    }

    #[test]
    fn material_does_not_satisfy_animate_requirement() {
        assert!(!EntityCategory::Material.satisfies(&[EntityCategory::Animate]));
    }

    #[test]
    fn inference_verb_detection() {
        assert!(VerbClass::Communication.is_inference_verb("suggest"));
        assert!(VerbClass::Communication.is_inference_verb("indicate"));
        assert!(!VerbClass::Communication.is_inference_verb("tell"));
        assert!(!VerbClass::Mental.is_inference_verb("suggest"));
    }

    #[test]
    fn mental_verb_with_inanimate_subject_violates() {
        let violations = check_selectional_preferences(
            VerbClass::Mental,
            Some(EntityCategory::Material),
            Some(EntityCategory::Abstract),
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::AgentViolation);
    }

    #[test]
    fn well_formed_frame_has_no_violations() {
        let violations = check_selectional_preferences(
            VerbClass::Mental,
            Some(EntityCategory::Animate),
            Some(EntityCategory::Proposition),
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn no_object_means_no_patient_violation() {
        let violations =
            check_selectional_preferences(VerbClass::Mental, Some(EntityCategory::Material), None);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::AgentViolation);
    }
}
