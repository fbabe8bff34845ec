//! Tree extractors: entities, acts, and the roles binding them.

pub mod act;
pub mod entity;
pub mod role;

pub use act::{extract_acts, Act, Actuality, Modality};
pub use entity::{extract_entities, Entity};
pub use role::{map_roles, Role};
