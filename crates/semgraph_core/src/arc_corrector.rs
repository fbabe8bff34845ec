//! Arc Corrector: ditransitive compound→iobj rewrite.
//!
//! The double-object construction ("gave the doctor the medication") has
//! no preposition marking the recipient, so the greedy parser sometimes
//! mislabels it as a `compound` modifying the direct object rather than
//! an `iobj` of the verb. This pass looks for exactly that shape — a
//! ditransitive verb with both an `obj` child and a `compound` child that
//! precedes it — and relabels the `compound` arc to `iobj`.
//!
//! A no-op everywhere else: verbs outside the ditransitive list, or a verb
//! lacking the obj+compound pairing, are left untouched.

use crate::parser::Arc;
use crate::token::Token;
use semgraph_base::Interner;

const DITRANSITIVE_VERBS: &[&str] = &[
    "give", "send", "show", "offer", "tell", "hand", "award", "lend", "pass", "teach", "promise",
];

/// Rewrites `compound`-labeled arcs that are really ditransitive recipients
/// into `iobj`, mutating `arcs` in place. Returns the number of arcs
/// rewritten.
pub fn correct_ditransitive_arcs(arcs: &mut [Arc], tokens: &[Token], interner: &Interner) -> usize {
    let mut corrections = 0;

    let verb_ids: Vec<usize> = tokens
        .iter()
        .filter(|t| t.pos.is_verb())
        .filter(|t| DITRANSITIVE_VERBS.contains(&interner.resolve(t.lemma)))
        .map(|t| t.id)
        .collect();

    for verb_id in verb_ids {
        let obj_dependent = arcs
            .iter()
            .find(|a| a.head_id == verb_id && a.label == "obj")
            .map(|a| a.dependent_id);

        let Some(obj_id) = obj_dependent else { continue };

        let compound_index = arcs.iter().position(|a| {
            a.head_id == verb_id && a.label == "compound" && a.dependent_id < obj_id
        });

        if let Some(index) = compound_index {
            arcs[index].label = "iobj".to_string();
            corrections += 1;
        }
    }

    corrections
}
