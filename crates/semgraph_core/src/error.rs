//! Pipeline-level error types.
//!
//! Low-level, span-annotated errors from `semgraph-base` are wrapped here
//! with the name of the pipeline stage that raised them, per the
//! stage-annotated re-throw policy: `normalizeUnicode`, `tokenize`,
//! `tagPos`, `parseDependencies`, `extractEntities`, `extractActs`,
//! `detectRoles`, `buildGraph`.

use std::fmt;

/// The named pipeline stage a [`PipelineError`] was raised from.
pub const STAGE_NORMALIZE: &str = "normalizeUnicode";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_TAG: &str = "tagPos";
pub const STAGE_PARSE: &str = "parseDependencies";
pub const STAGE_ARC_CORRECT: &str = "correctArcs";
pub const STAGE_ENTITY_EXTRACT: &str = "extractEntities";
pub const STAGE_ACT_EXTRACT: &str = "extractActs";
pub const STAGE_ROLE_DETECT: &str = "detectRoles";
pub const STAGE_GRAPH_BUILD: &str = "buildGraph";
pub const STAGE_CONFIG_LOAD: &str = "loadConfig";

/// Errors raised while running the pipeline.
#[derive(Debug, Clone)]
pub enum PipelineError {
    /// The input text was rejected outright: empty, too large, or malformed.
    /// `build()` returns an empty graph with a metadata marker rather than
    /// propagating this to most callers; it is exposed for callers who want
    /// to distinguish the rejection reason.
    InputValidation { reason: String },

    /// A required model (POS weights, dependency weights, calibration
    /// table) was absent and no fallback was configured.
    ModelMissing { model: String },

    /// An exception occurred inside a named pipeline stage.
    StageFailure { stage: &'static str, message: String },

    /// The configured complexity budget was exceeded.
    BudgetExceeded { limit: String, observed: usize },

    /// A domain config overlay tried to redefine an already-defined term.
    /// Logged as a warning rather than surfaced as a hard failure; last
    /// loader wins.
    ConfigConflict { base_type: String, term: String },
}

impl PipelineError {
    /// Wraps a lower-level error with the name of the stage that raised it.
    pub fn stage(stage: &'static str, message: impl Into<String>) -> Self {
        PipelineError::StageFailure {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InputValidation { reason } => {
                write!(f, "input validation failed: {}", reason)
            }
            PipelineError::ModelMissing { model } => {
                write!(f, "required model missing: {}", model)
            }
            PipelineError::StageFailure { stage, message } => {
                write!(f, "stage '{}' failed: {}", stage, message)
            }
            PipelineError::BudgetExceeded { limit, observed } => {
                write!(f, "complexity budget exceeded: {} (observed {})", limit, observed)
            }
            PipelineError::ConfigConflict { base_type, term } => {
                write!(f, "config conflict: '{}' already defines '{}'", base_type, term)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<semgraph_base::SpannedError> for PipelineError {
    fn from(err: semgraph_base::SpannedError) -> Self {
        PipelineError::StageFailure {
            stage: STAGE_TOKENIZE,
            message: err.to_string(),
        }
    }
}

/// Alias for `std::result::Result<T, PipelineError>`.
pub type Result<T> = std::result::Result<T, PipelineError>;
