//! Graph model and the builder orchestrator that assembles it.

pub mod builder;
pub mod model;

pub use builder::{build, BuildMetadata, BuildOptions, BuildResult, GraphBuilder};
pub use model::{clean_text_segment, mint_iri, Node, PropertyValue};
