mod consolidation_config;
mod decay_config;
mod defaults;
mod inference_config;
mod validation_config;

pub use consolidation_config::ConsolidationConfig;
pub use decay_config::DecayConfig;
pub use inference_config::InferenceConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

/// Root configuration for the Engram system.
///
/// Constructed once at startup and passed by reference into each engine's
/// constructor — there is no process-wide config state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub consolidation: ConsolidationConfig,
    pub decay: DecayConfig,
    pub inference: InferenceConfig,
    pub validation: ValidationConfig,
}

impl EngramConfig {
    /// Parse a config from TOML, falling back to defaults for missing keys.
    pub fn from_toml_str(input: &str) -> crate::EngramResult<Self> {
        toml::from_str(input).map_err(|e| crate::EngramError::Config {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = EngramConfig::default();
        assert_eq!(config.consolidation.max_batch_size, 100);
        assert_eq!(config.consolidation.min_batch_size, 5);
        assert_eq!(config.consolidation.min_age_days, 7);
        assert!((config.consolidation.merge_threshold - 0.5).abs() < f64::EPSILON);
        assert!((config.decay.archival_threshold - 0.1).abs() < f64::EPSILON);
        assert!((config.inference.min_score - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = EngramConfig::from_toml_str(
            r#"
            [consolidation]
            min_batch_size = 10

            [inference]
            file_weight = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.consolidation.min_batch_size, 10);
        assert_eq!(config.consolidation.max_batch_size, 100);
        assert!((config.inference.file_weight - 0.5).abs() < f64::EPSILON);
        assert!((config.inference.function_weight - 0.30).abs() < f64::EPSILON);
    }
}
