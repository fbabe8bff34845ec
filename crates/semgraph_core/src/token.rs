//! Token and part-of-speech tag types shared by the tagger, parser and
//! every downstream tree-walking stage.

use semgraph_base::{Span, Symbol};

/// A Penn-Treebank-style part-of-speech tag.
///
/// Only the tags the pipeline actually branches on are distinguished by
/// name; the rest are grouped under [`PosTag::Other`] carrying the raw
/// string, so an unfamiliar tag never panics a downstream match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// NN — singular or mass common noun.
    NounSingular,
    /// NNS — plural common noun.
    NounPlural,
    /// NNP — singular proper noun.
    ProperNounSingular,
    /// NNPS — plural proper noun.
    ProperNounPlural,
    /// PRP — personal pronoun.
    Pronoun,
    /// PRP$ — possessive pronoun.
    PossessivePronoun,
    /// WP / WDT — wh-pronoun or wh-determiner (who, which, that as relativizer).
    WhPronoun,
    /// VB — base form verb.
    VerbBase,
    /// VBD — past tense verb.
    VerbPast,
    /// VBG — gerund/present participle.
    VerbGerund,
    /// VBN — past participle.
    VerbPastParticiple,
    /// VBP — non-3rd-person singular present verb.
    VerbPresent,
    /// VBZ — 3rd-person singular present verb.
    VerbPresent3s,
    /// MD — modal auxiliary (must, should, may, can, will).
    Modal,
    /// JJ / JJR / JJS — adjective, comparative, superlative.
    Adjective,
    /// RB / RBR / RBS — adverb, comparative, superlative.
    Adverb,
    /// DT — determiner (the, a, this, that).
    Determiner,
    /// IN — preposition or subordinating conjunction.
    Preposition,
    /// CC — coordinating conjunction (and, but, or, nor, yet, so).
    Conjunction,
    /// TO — infinitival "to".
    To,
    /// CD — cardinal number.
    Number,
    /// POS — possessive ending ('s).
    PossessiveEnding,
    /// Sentence-final or internal punctuation.
    Punctuation,
    /// Any tag the tagger emits that the pipeline does not branch on by name.
    Other(&'static str),
}

impl PosTag {
    /// Returns `true` for any verb tag (base, inflected, modal excluded).
    pub fn is_verb(self) -> bool {
        matches!(
            self,
            PosTag::VerbBase
                | PosTag::VerbPast
                | PosTag::VerbGerund
                | PosTag::VerbPastParticiple
                | PosTag::VerbPresent
                | PosTag::VerbPresent3s
        )
    }

    /// Returns `true` for any nominal tag: common or proper noun, pronoun.
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            PosTag::NounSingular
                | PosTag::NounPlural
                | PosTag::ProperNounSingular
                | PosTag::ProperNounPlural
                | PosTag::Pronoun
                | PosTag::PossessivePronoun
                | PosTag::WhPronoun
        )
    }

    /// Returns `true` for either proper-noun tag.
    pub fn is_proper_noun(self) -> bool {
        matches!(self, PosTag::ProperNounSingular | PosTag::ProperNounPlural)
    }

    /// The canonical Penn-Treebank tag string for this tag, used as a
    /// feature-store input and for round-tripping model files.
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::NounSingular => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNounSingular => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::WhPronoun => "WP",
            PosTag::VerbBase => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbPresent3s => "VBZ",
            PosTag::Modal => "MD",
            PosTag::Adjective => "JJ",
            PosTag::Adverb => "RB",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::To => "TO",
            PosTag::Number => "CD",
            PosTag::PossessiveEnding => "POS",
            PosTag::Punctuation => ".",
            PosTag::Other(raw) => raw,
        }
    }

    /// Parses a Penn-Treebank tag string into a [`PosTag`].
    ///
    /// Unrecognized tags round-trip through [`PosTag::Other`] rather than
    /// failing, since the tag set a model was trained with may exceed the
    /// set the pipeline branches on by name.
    pub fn from_str(s: &str) -> PosTag {
        match s {
            "NN" => PosTag::NounSingular,
            "NNS" => PosTag::NounPlural,
            "NNP" => PosTag::ProperNounSingular,
            "NNPS" => PosTag::ProperNounPlural,
            "PRP" => PosTag::Pronoun,
            "PRP$" => PosTag::PossessivePronoun,
            "WP" | "WDT" | "WP$" => PosTag::WhPronoun,
            "VB" => PosTag::VerbBase,
            "VBD" => PosTag::VerbPast,
            "VBG" => PosTag::VerbGerund,
            "VBN" => PosTag::VerbPastParticiple,
            "VBP" => PosTag::VerbPresent,
            "VBZ" => PosTag::VerbPresent3s,
            "MD" => PosTag::Modal,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "RB" | "RBR" | "RBS" => PosTag::Adverb,
            "DT" => PosTag::Determiner,
            "IN" => PosTag::Preposition,
            "CC" => PosTag::Conjunction,
            "TO" => PosTag::To,
            "CD" => PosTag::Number,
            "POS" => PosTag::PossessiveEnding,
            "." | "," | ":" | "``" | "''" => PosTag::Punctuation,
            other => PosTag::Other(leak_tag(other)),
        }
    }
}

/// Interns an unrecognized tag string once so [`PosTag::Other`] can carry a
/// `&'static str` without repeated allocation for repeat occurrences.
///
/// Small, bounded vocabulary (the tag set of a loaded model) — leaking is
/// the same cost a `'static` string table would pay, just built lazily.
fn leak_tag(s: &str) -> &'static str {
    use std::collections::HashMap;
    use std::sync::Mutex;
    static SEEN: Mutex<Option<HashMap<String, &'static str>>> = Mutex::new(None);
    let mut guard = SEEN.lock().unwrap();
    let map = guard.get_or_insert_with(HashMap::new);
    if let Some(existing) = map.get(s) {
        return existing;
    }
    let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
    map.insert(s.to_string(), leaked);
    leaked
}

/// A single token with its surface form, lemma, tag, and source span.
///
/// Token ids are 1-indexed; id 0 is reserved for the synthetic ROOT node
/// the dependency parser attaches top-level heads to.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub id: usize,
    pub text: Symbol,
    pub lemma: Symbol,
    pub pos: PosTag,
    pub span: Span,
}

impl Token {
    pub fn new(id: usize, text: Symbol, lemma: Symbol, pos: PosTag, span: Span) -> Self {
        Token { id, text, lemma, pos, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_tags_report_is_verb() {
        assert!(PosTag::VerbPast.is_verb());
        assert!(!PosTag::NounSingular.is_verb());
    }

    #[test]
    fn nominal_tags_report_is_nominal() {
        assert!(PosTag::Pronoun.is_nominal());
        assert!(PosTag::ProperNounSingular.is_nominal());
        assert!(!PosTag::VerbBase.is_nominal());
    }

    #[test]
    fn tag_round_trips_through_str() {
        for tag in [
            PosTag::NounSingular,
            PosTag::VerbPast,
            PosTag::Modal,
            PosTag::Preposition,
        ] {
            assert_eq!(PosTag::from_str(tag.as_str()), tag);
        }
    }

    #[test]
    fn unknown_tag_round_trips_through_other() {
        let tag = PosTag::from_str("FW");
        assert_eq!(tag.as_str(), "FW");
        match tag {
            PosTag::Other(s) => assert_eq!(s, "FW"),
            _ => panic!("expected Other"),
        }
    }

    #[test]
    fn is_proper_noun_detects_both_number_forms() {
        assert!(PosTag::ProperNounSingular.is_proper_noun());
        assert!(PosTag::ProperNounPlural.is_proper_noun());
        assert!(!PosTag::NounSingular.is_proper_noun());
    }
}
