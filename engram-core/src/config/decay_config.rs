use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Confidence below which a memory becomes an archival candidate.
    pub archival_threshold: f64,
    /// Minimum confidence delta worth persisting (noise floor).
    pub persistence_epsilon: f64,
    /// Confidence below which a memory is flagged for validation.
    pub validation_trigger: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            archival_threshold: defaults::ARCHIVAL_THRESHOLD,
            persistence_epsilon: defaults::PERSISTENCE_EPSILON,
            validation_trigger: defaults::VALIDATION_TRIGGER,
        }
    }
}
