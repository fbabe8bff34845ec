#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Verb-class, entity-category and gazetteer lexicons for semgraph.
//!
//! This crate provides the vocabulary layer the dependency-tree extractors
//! consult when assigning denoted types and checking selectional
//! preferences, plus the runtime-loaded gazetteer and domain-config
//! registries that let a deployment extend that vocabulary without
//! recompiling.
//!
//! # Core Types
//!
//! The [`types`] module defines the selectional-preference vocabulary:
//!
//! - [`VerbClass`] — mental, physical, communication, transfer, employment,
//!   governance, creation, perception, stative.
//! - [`EntityCategory`] — animate, organization, material, abstract,
//!   proposition, inanimate.
//! - [`check_selectional_preferences`] — reports agent/patient violations
//!   for a verb class and its observed argument categories.
//!
//! The [`wordlists`] module classifies verb and noun lemmas into those
//! categories using curated lists plus morphological fallback rules.
//!
//! The [`runtime`] module loads gazetteer and domain-config JSON files at
//! runtime, per the precedence and conflict rules in their doc comments.
//!
//! # Example
//!
//! ```
//! use semgraph_lexicon::{classify_verb, classify_entity_category, check_selectional_preferences};
//!
//! let class = classify_verb("review").unwrap();
//! let subject = classify_entity_category("doctor");
//! let object = classify_entity_category("report");
//! let violations = check_selectional_preferences(class, subject, object);
//! assert!(violations.is_empty());
//! ```

/// Selectional-preference vocabulary: verb classes and entity categories.
pub mod types;
pub use types::{
    check_selectional_preferences, EntityCategory, SelectionalViolation, VerbClass, ViolationKind,
};

/// Curated word lists and morphological fallback rules for classification.
pub mod wordlists;
pub use wordlists::{classify_denoted_type, classify_entity_category, classify_verb};

/// Runtime JSON loading for gazetteers and domain config overlays.
pub mod runtime;
pub use runtime::{
    ConfigConflict, DomainConfig, DomainConfigFile, Gazetteer, GazetteerEntry, GazetteerMatchKind,
    GazetteerMeta,
};
