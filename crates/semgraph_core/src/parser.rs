//! Dependency Parser: greedy arc-eager transition-based parsing with
//! averaged-perceptron scoring.
//!
//! Arc-eager has four transitions: `shift` moves the buffer front onto the
//! stack; `left-arc` attaches the stack top as a dependent of the buffer
//! front and pops it; `right-arc` attaches the buffer front as a
//! dependent of the stack top and pushes it; `reduce` pops a stack top
//! that already has a head. Scoring is greedy best-first: at each step we
//! score every legal transition and take the argmax, recording the score
//! margin between the winner and the runner-up on the arc it produces.
//!
//! Greedy decoding is not guaranteed to leave every token attached — a
//! token can be popped by `reduce` without ever gaining a head if the
//! model scores badly. A root-attachment sweep after the transition loop
//! attaches any such orphan directly to the synthetic root (id 0),
//! guaranteeing the invariant that every arc set forms a tree spanning
//! `1..n` rooted at 0.

use crate::feature_store::{best_with_margin, score, FeatureStore};
use crate::models::DepModel;
use crate::token::Token;
use semgraph_base::Interner;
use std::collections::VecDeque;

/// One dependency arc: `dependent_id` is governed by `head_id` under
/// `label`. `score_margin` is the gap between the transition that
/// produced this arc and its runner-up, consumed by confidence
/// calibration. Root-attachment sweep arcs carry a margin of `0.0`
/// since no model scored them.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub dependent_id: usize,
    pub head_id: usize,
    pub label: String,
    pub score_margin: f64,
}

/// The label the root-attachment sweep assigns to orphaned tokens.
pub const ROOT_FALLBACK_LABEL: &str = "root";

const SHIFT: &str = "shift";
const REDUCE: &str = "reduce";

struct Config {
    stack: Vec<usize>,
    buffer: VecDeque<usize>,
    heads: Vec<Option<usize>>,
}

impl Config {
    fn new(n: usize) -> Self {
        Config {
            stack: vec![0],
            buffer: (1..=n).collect(),
            heads: vec![None; n + 1],
        }
    }

    fn stack_top(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    fn buffer_front(&self) -> Option<usize> {
        self.buffer.front().copied()
    }
}

/// Parses `tokens` into a set of dependency arcs using `model`.
pub fn parse(tokens: &[Token], model: &DepModel, interner: &Interner) -> Vec<Arc> {
    let n = tokens.len();
    let store = FeatureStore::new(model.num_buckets);
    let mut config = Config::new(n);
    let mut arcs: Vec<Arc> = Vec::new();

    while config.buffer_front().is_some() {
        let candidates = legal_candidates(&config, &model.labels);
        if candidates.is_empty() {
            break;
        }
        let features = extract_features(&config, tokens, interner);
        let candidate_refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let scored = score(&model.weights, &store, &features, &candidate_refs);
        let (best, margin) = match best_with_margin(&scored) {
            Some(result) => result,
            None => break,
        };
        apply_transition(&mut config, best, margin, &mut arcs);
    }

    sweep_unattached_to_root(&config, n, &mut arcs);
    arcs
}

fn legal_candidates(config: &Config, labels: &[String]) -> Vec<String> {
    let mut candidates = Vec::new();

    if config.buffer_front().is_some() {
        candidates.push(SHIFT.to_string());
    }

    if let Some(top) = config.stack_top() {
        if top != 0 && config.heads[top].is_some() {
            candidates.push(REDUCE.to_string());
        }
        if let Some(front) = config.buffer_front() {
            if top != 0 && config.heads[top].is_none() {
                for label in labels {
                    candidates.push(format!("left-arc:{}", label));
                }
            }
            let _ = front;
            for label in labels {
                candidates.push(format!("right-arc:{}", label));
            }
        }
    }

    candidates
}

fn apply_transition(config: &mut Config, transition: &str, margin: f64, arcs: &mut Vec<Arc>) {
    if transition == SHIFT {
        if let Some(front) = config.buffer.pop_front() {
            config.stack.push(front);
        }
        return;
    }
    if transition == REDUCE {
        config.stack.pop();
        return;
    }
    if let Some(label) = transition.strip_prefix("left-arc:") {
        let top = config.stack.pop().unwrap();
        let front = *config.buffer.front().unwrap();
        config.heads[top] = Some(front);
        arcs.push(Arc {
            dependent_id: top,
            head_id: front,
            label: label.to_string(),
            score_margin: margin,
        });
        return;
    }
    if let Some(label) = transition.strip_prefix("right-arc:") {
        let top = *config.stack.last().unwrap();
        let front = config.buffer.pop_front().unwrap();
        config.heads[front] = Some(top);
        config.stack.push(front);
        arcs.push(Arc {
            dependent_id: front,
            head_id: top,
            label: label.to_string(),
            score_margin: margin,
        });
    }
}

fn sweep_unattached_to_root(config: &Config, n: usize, arcs: &mut Vec<Arc>) {
    for id in 1..=n {
        if config.heads[id].is_none() {
            arcs.push(Arc {
                dependent_id: id,
                head_id: 0,
                label: ROOT_FALLBACK_LABEL.to_string(),
                score_margin: 0.0,
            });
        }
    }
}

fn extract_features(config: &Config, tokens: &[Token], interner: &Interner) -> Vec<String> {
    let mut features = Vec::new();

    let describe = |id: usize| -> (String, &'static str) {
        if id == 0 {
            ("<root>".to_string(), "ROOT")
        } else {
            let tok = &tokens[id - 1];
            (interner.resolve(tok.text).to_lowercase(), tok.pos.as_str())
        }
    };

    if let Some(top) = config.stack_top() {
        let (word, pos) = describe(top);
        features.push(format!("s0w={}", word));
        features.push(format!("s0t={}", pos));
    }
    if config.stack.len() >= 2 {
        let second = config.stack[config.stack.len() - 2];
        let (word, pos) = describe(second);
        features.push(format!("s1w={}", word));
        features.push(format!("s1t={}", pos));
    }
    if let Some(front) = config.buffer_front() {
        let (word, pos) = describe(front);
        features.push(format!("b0w={}", word));
        features.push(format!("b0t={}", pos));
    }
    if config.buffer.len() >= 2 {
        let next = config.buffer[1];
        let (word, pos) = describe(next);
        features.push(format!("b1w={}", word));
        features.push(format!("b1t={}", pos));
    }
    if let (Some(top), Some(front)) = (config.stack_top(), config.buffer_front()) {
        let distance = if front > top { front - top } else { top - front };
        features.push(format!("dist={}", distance.min(10)));
    }
    features.push(format!("stacklen={}", config.stack.len().min(5)));
    features.push(format!("buflen={}", config.buffer.len().min(5)));

    features
}
