//! Dep Tree: child/head indices over a parsed arc set, with the
//! subtree-traversal rules the tree extractors depend on.

use crate::parser::Arc;
use std::collections::HashMap;

/// Dependency labels that mark a clause boundary: a descendant attached
/// under one of these labels is a separate clause (relative clause,
/// clausal complement, adverbial clause) and is excluded when computing
/// an entity's subtree span.
const CLAUSE_BOUNDARY_LABELS: &[&str] = &["acl", "acl:relcl", "ccomp", "advcl"];

/// The label marking an apposition: `appos` children become aliases on
/// the head entity rather than separate entities or span members.
pub const APPOSITION_LABEL: &str = "appos";

/// Indexed view over a dependency arc set: children by head, and the
/// governing arc for each dependent.
pub struct DepTree {
    arcs_by_dependent: HashMap<usize, Arc>,
    children: HashMap<usize, Vec<usize>>,
}

impl DepTree {
    /// Builds the tree from a flat arc list. Children are stored in
    /// ascending dependent-id order, which doubles as left-to-right token
    /// order.
    pub fn new(arcs: Vec<Arc>) -> Self {
        let mut arcs_by_dependent = HashMap::new();
        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();

        for arc in arcs {
            children.entry(arc.head_id).or_default().push(arc.dependent_id);
            arcs_by_dependent.insert(arc.dependent_id, arc);
        }
        for kids in children.values_mut() {
            kids.sort_unstable();
        }

        DepTree { arcs_by_dependent, children }
    }

    /// The dependent ids directly governed by `head_id`, in token order.
    pub fn children_of(&self, head_id: usize) -> &[usize] {
        self.children.get(&head_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The arc governing `dependent_id`, if any (absent only for the
    /// synthetic root, id 0).
    pub fn arc_of(&self, dependent_id: usize) -> Option<&Arc> {
        self.arcs_by_dependent.get(&dependent_id)
    }

    /// The dependent ids directly attached to the synthetic root (id 0) —
    /// the sentence's main predicate(s) or, for coordinated main clauses,
    /// each conjunct's head.
    pub fn roots(&self) -> Vec<usize> {
        self.children_of(0).to_vec()
    }

    /// Every token id in `head_id`'s subtree, stopping at clause
    /// boundaries: a child attached under `acl`, `acl:relcl`, `ccomp`, or
    /// `advcl` is excluded along with everything beneath it, since that
    /// subtree belongs to a separate clause. `appos` children are also
    /// excluded — they surface as aliases via [`DepTree::appositions`],
    /// not as span members.
    ///
    /// Returns ids in ascending (token) order.
    pub fn entity_subtree(&self, head_id: usize) -> Vec<usize> {
        let mut collected = vec![head_id];
        self.collect_subtree(head_id, &mut collected);
        collected.sort_unstable();
        collected
    }

    fn collect_subtree(&self, head_id: usize, collected: &mut Vec<usize>) {
        for &child in self.children_of(head_id) {
            let label = self.arc_of(child).map(|a| a.label.as_str()).unwrap_or("");
            if CLAUSE_BOUNDARY_LABELS.contains(&label) || label == APPOSITION_LABEL {
                continue;
            }
            collected.push(child);
            self.collect_subtree(child, collected);
        }
    }

    /// Dependent ids attached to `head_id` under `appos`, used to mint
    /// aliases on the head entity rather than new entities.
    pub fn appositions(&self, head_id: usize) -> Vec<usize> {
        self.children_of(head_id)
            .iter()
            .copied()
            .filter(|&child| {
                self.arc_of(child).map(|a| a.label == APPOSITION_LABEL).unwrap_or(false)
            })
            .collect()
    }
}
