//! English sentence to typed semantic graph pipeline.
//!
//! Runs text through normalization, tokenization, POS tagging, dependency
//! parsing, tree extraction and role mapping, then assembles the result
//! into a small ontology-typed graph: entities, acts, roles and the
//! relations binding them. See [`graph::GraphBuilder`] for the orchestrator
//! and [`graph::build`] for the stateless entry point.

pub mod arc_corrector;
pub mod budget;
pub mod clause;
pub mod confidence;
pub mod config;
pub mod dep_tree;
pub mod error;
pub mod extract;
pub mod feature_store;
pub mod graph;
pub mod mode;
pub mod models;
pub mod ner;
pub mod normalize;
pub mod parser;
pub mod selectional;
pub mod tagger;
pub mod token;
pub mod tokenizer;

pub use error::{PipelineError, Result};
pub use graph::{build, BuildMetadata, BuildOptions, BuildResult, GraphBuilder};
