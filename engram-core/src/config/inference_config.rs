use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity-overlap causal inference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub file_weight: f64,
    pub function_weight: f64,
    pub pattern_weight: f64,
    pub constraint_weight: f64,
    /// Minimum aggregate overlap score to propose an edge.
    pub min_score: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            file_weight: defaults::FILE_WEIGHT,
            function_weight: defaults::FUNCTION_WEIGHT,
            pattern_weight: defaults::PATTERN_WEIGHT,
            constraint_weight: defaults::CONSTRAINT_WEIGHT,
            min_score: defaults::MIN_EDGE_SCORE,
        }
    }
}
