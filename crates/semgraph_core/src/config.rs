//! Domain Config Loader glue: wraps [`semgraph_lexicon::DomainConfig`] with
//! pipeline-level conflict logging.

use crate::error::{PipelineError, STAGE_CONFIG_LOAD};
use semgraph_lexicon::DomainConfig;

/// Loads a domain config overlay, logging (not failing on) any conflict it
/// introduces — per the loader's last-loader-wins policy, a conflicting
/// term still gets registered, it's just noted for the caller.
pub fn load_overlay(config: &mut DomainConfig, json: &str) -> Result<(), PipelineError> {
    let before = config.conflicts().len();
    config
        .load_str(json)
        .map_err(|e| PipelineError::stage(STAGE_CONFIG_LOAD, e.to_string()))?;

    for conflict in &config.conflicts()[before..] {
        log::warn!(
            "domain config conflict: '{}' already defines '{}' (previous={}, attempted={})",
            conflict.base_type,
            conflict.term,
            conflict.previous_value,
            conflict.attempted_value,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_overlay_logs_but_does_not_fail() {
        let mut config = DomainConfig::new();
        load_overlay(
            &mut config,
            r#"{ "domain": "a", "version": "1", "typeSpecializations": { "Organization": { "hospital": "Hospital" } } }"#,
        )
        .unwrap();
        load_overlay(
            &mut config,
            r#"{ "domain": "b", "version": "1", "typeSpecializations": { "Organization": { "hospital": "MedicalCenter" } } }"#,
        )
        .unwrap();
        assert_eq!(config.conflicts().len(), 1);
        assert_eq!(config.specialize_type("Organization", "hospital"), Some("MedicalCenter"));
    }

    #[test]
    fn malformed_json_is_a_stage_failure() {
        let mut config = DomainConfig::new();
        let err = load_overlay(&mut config, "not json").unwrap_err();
        match err {
            PipelineError::StageFailure { stage, .. } => assert_eq!(stage, STAGE_CONFIG_LOAD),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
