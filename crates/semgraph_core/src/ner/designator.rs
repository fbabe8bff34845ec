//! Complex Designator Detector: greedy capitalized-run scanner used when
//! greedy NER is enabled for a sentence.
//!
//! A Complex Designator is a capitalized span like "The World Health
//! Organization" or "Johnson & Johnson Pharmaceuticals" — longer and more
//! specific than a single gazetteer hit, so any mention or Tier-2 node
//! whose span it overlaps is shadow-suppressed before act extraction runs.

use crate::token::Token;
use semgraph_base::{Interner, Span};
use semgraph_lexicon::classify_denoted_type;

/// Tokens that may appear *inside* a capitalized run without breaking it,
/// as long as a capitalized token follows — "of", "and", "for", and the
/// articles.
const JOINERS: &[&str] = &["of", "and", "for", "the", "a", "an"];

/// A detected Complex Designator span and its component token ids.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignatorSpan {
    pub token_ids: Vec<usize>,
    pub span: Span,
    /// The full designator text, joining every component token in order.
    pub full_name: String,
    /// The denoted type this designator names — "Organization" by default,
    /// since a long capitalized run is most often an institution name.
    pub denoted_type: String,
}

fn is_capitalized(text: &str) -> bool {
    text.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Scans `tokens` left to right for capitalized runs, allowing the
/// designated joiner words to appear mid-run but never as the final token
/// (a joiner can't terminate a designator — it's trimmed back to the last
/// capitalized token).
pub fn detect(tokens: &[Token], interner: &Interner) -> Vec<DesignatorSpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let text = interner.resolve(tokens[i].text);
        if !is_capitalized(text) {
            i += 1;
            continue;
        }

        let start = i;
        let mut last_capitalized = i;
        let mut j = i + 1;
        while j < tokens.len() {
            let word = interner.resolve(tokens[j].text).to_lowercase();
            let token_text = interner.resolve(tokens[j].text);
            if is_capitalized(token_text) {
                last_capitalized = j;
                j += 1;
            } else if JOINERS.contains(&word.as_str()) {
                j += 1;
            } else {
                break;
            }
        }

        let ids: Vec<usize> = tokens[start..=last_capitalized].iter().map(|t| t.id).collect();
        let span = tokens[start].span.merge(tokens[last_capitalized].span);
        let full_name = tokens[start..=last_capitalized]
            .iter()
            .map(|t| interner.resolve(t.text))
            .collect::<Vec<_>>()
            .join(" ");
        let head_lemma = interner.resolve(tokens[last_capitalized].lemma).to_lowercase();
        let denoted_type = classify_denoted_type(&head_lemma).unwrap_or("Organization").to_string();
        spans.push(DesignatorSpan { token_ids: ids, span, full_name, denoted_type });

        i = last_capitalized + 1;
    }

    spans
}

/// Removes every entity whose span overlaps an active Complex Designator
/// span, per the shadow-suppression rule (interval overlap: `a<d && c<b`,
/// implemented by [`Span::overlaps`]).
pub fn suppress_shadowed<'a, T>(
    entities: Vec<T>,
    designators: &[DesignatorSpan],
    span_of: impl Fn(&T) -> Span,
) -> Vec<T> {
    entities
        .into_iter()
        .filter(|e| !designators.iter().any(|d| d.span.overlaps(span_of(e))))
        .collect()
}
