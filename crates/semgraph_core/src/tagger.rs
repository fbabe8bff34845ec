//! POS Tagger: greedy left-to-right averaged-perceptron inference.
//!
//! Training is out of scope (inference only); this module scores each
//! token against the tags the loaded [`PosModel`] was trained with, using
//! a fixed feature template over the current word, its neighbors, and the
//! previously assigned tag.

use crate::feature_store::{best_with_margin, score, FeatureStore};
use crate::models::PosModel;
use crate::token::{PosTag, Token};
use crate::tokenizer::RawToken;
use semgraph_base::Interner;

/// Penn-Treebank tags used when a loaded model doesn't enumerate its own
/// tag set (`tags` empty in the model file).
const DEFAULT_TAGS: &[&str] = &[
    "NN", "NNS", "NNP", "NNPS", "PRP", "PRP$", "WP", "WDT", "VB", "VBD", "VBG", "VBN", "VBP",
    "VBZ", "MD", "JJ", "JJR", "JJS", "RB", "RBR", "RBS", "DT", "IN", "CC", "TO", "CD", "POS",
];

/// Tags `tokens` in order, threading the previously assigned tag into each
/// successive feature vector (greedy, not Viterbi — matches the
/// perceptron tagger's inference-time contract: no backtracking).
pub fn tag(tokens: &[RawToken], model: &PosModel, interner: &mut Interner) -> Vec<Token> {
    let store = FeatureStore::new(0);
    let candidate_tags: Vec<&str> = if model.tags.is_empty() {
        DEFAULT_TAGS.to_vec()
    } else {
        model.tags.iter().map(|s| s.as_str()).collect()
    };

    let mut tagged = Vec::with_capacity(tokens.len());
    let mut prev_tag = "<s>".to_string();

    for (i, raw) in tokens.iter().enumerate() {
        let word = interner.resolve(raw.text).to_string();
        let prev_word = if i == 0 {
            "<s>".to_string()
        } else {
            interner.resolve(tokens[i - 1].text).to_string()
        };
        let next_word = tokens
            .get(i + 1)
            .map(|t| interner.resolve(t.text).to_string())
            .unwrap_or_else(|| "</s>".to_string());

        let features = extract_features(&word, &prev_word, &next_word, &prev_tag);
        let scored = score(&model.weights, &store, &features, &candidate_tags);
        let (best_tag, _margin) = best_with_margin(&scored).unwrap_or(("NN", 0.0));

        let pos = PosTag::from_str(best_tag);
        let lemma_text = lemmatize(&word, pos);
        let lemma = interner.intern(&lemma_text);

        tagged.push(Token::new(i + 1, raw.text, lemma, pos, raw.span));
        prev_tag = best_tag.to_string();
    }

    tagged
}

fn extract_features(word: &str, prev_word: &str, next_word: &str, prev_tag: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    let mut features = vec![
        format!("w0={}", lower),
        format!("w-1={}", prev_word.to_lowercase()),
        format!("w+1={}", next_word.to_lowercase()),
        format!("t-1={}", prev_tag),
        format!("cap={}", word.chars().next().map(char::is_uppercase).unwrap_or(false) as u8),
        format!("digit={}", word.chars().all(|c| c.is_ascii_digit()) as u8),
        format!("hyphen={}", word.contains('-') as u8),
    ];
    if lower.len() >= 3 {
        features.push(format!("suf3={}", &lower[lower.len() - 3..]));
    }
    if lower.len() >= 3 {
        features.push(format!("pre3={}", &lower[..3]));
    }
    features
}

/// Coarse, rule-based lemmatization. Not a full morphological analyzer:
/// strips the inflectional suffix a POS tag implies and leaves everything
/// else untouched, which is sufficient for lexicon lookup keys.
fn lemmatize(word: &str, pos: PosTag) -> String {
    let lower = word.to_lowercase();
    match pos {
        PosTag::NounPlural | PosTag::ProperNounPlural => strip_plural(&lower),
        PosTag::VerbPast | PosTag::VerbPastParticiple => strip_past(&lower),
        PosTag::VerbGerund => strip_gerund(&lower),
        PosTag::VerbPresent3s => strip_present3s(&lower),
        _ => lower,
    }
}

fn strip_plural(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if word.ends_with("es") && (word.ends_with("ches") || word.ends_with("shes") || word.ends_with("xes") || word.ends_with("ses")) {
        word[..word.len() - 2].to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}

fn strip_past(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ied") {
        format!("{}y", stem)
    } else if let Some(stem) = word.strip_suffix("ed") {
        stem.to_string()
    } else {
        word.to_string()
    }
}

fn strip_gerund(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ing") {
        stem.to_string()
    } else {
        word.to_string()
    }
}

fn strip_present3s(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = word.strip_suffix("es") {
        stem.to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}
