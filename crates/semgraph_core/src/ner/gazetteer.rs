//! Gazetteer NER: matches token runs against a loaded [`Gazetteer`].
//!
//! Proper-noun runs are tried longest-first so a multi-word canonical name
//! ("Acme General Hospital") wins over a match on just its head token.

use crate::token::Token;
use semgraph_base::{Interner, Span};
use semgraph_lexicon::{Gazetteer, GazetteerMatchKind};

/// A gazetteer hit over a contiguous token run.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerMention {
    pub token_ids: Vec<usize>,
    pub span: Span,
    pub canonical_name: String,
    pub entity_type: String,
    pub match_kind: GazetteerMatchKind,
}

/// Finds every gazetteer mention in `tokens`, scanning maximal runs of
/// proper-noun tokens and trying the longest sub-run first within each run
/// so multi-word canonical names take precedence over a single-token match
/// on the run's head word.
pub fn find_mentions(tokens: &[Token], interner: &Interner, gazetteer: &Gazetteer) -> Vec<GazetteerMention> {
    if gazetteer.is_empty() {
        return Vec::new();
    }

    let mut mentions = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if !tokens[i].pos.is_proper_noun() {
            i += 1;
            continue;
        }
        let run_start = i;
        let mut run_end = i;
        while run_end + 1 < tokens.len() && tokens[run_end + 1].pos.is_proper_noun() {
            run_end += 1;
        }

        if let Some(mention) = longest_match_in_run(tokens, run_start, run_end, interner, gazetteer) {
            i = tokens.iter().position(|t| t.id == *mention.token_ids.last().unwrap()).unwrap() + 1;
            mentions.push(mention);
        } else {
            i = run_end + 1;
        }
    }

    mentions
}

fn longest_match_in_run(
    tokens: &[Token],
    run_start: usize,
    run_end: usize,
    interner: &Interner,
    gazetteer: &Gazetteer,
) -> Option<GazetteerMention> {
    for end in (run_start..=run_end).rev() {
        let text = tokens[run_start..=end]
            .iter()
            .map(|t| interner.resolve(t.text))
            .collect::<Vec<_>>()
            .join(" ");
        if let Some((entry, kind)) = gazetteer.lookup(&text) {
            let span = tokens[run_start].span.merge(tokens[end].span);
            return Some(GazetteerMention {
                token_ids: tokens[run_start..=end].iter().map(|t| t.id).collect(),
                span,
                canonical_name: entry.canonical_name.clone(),
                entity_type: entry.entity_type.clone(),
                match_kind: kind,
            });
        }
    }
    None
}
