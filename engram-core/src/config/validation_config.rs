use serde::{Deserialize, Serialize};

use super::defaults;

/// Validation & healing engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Days without validation before a memory falls into the Stale scope.
    pub stale_after_days: i64,
    /// Age window for the Recent scope.
    pub recent_within_days: i64,
    /// Confidence multiplier for unhealed minor issues.
    pub minor_penalty: f64,
    /// Confidence multiplier for moderate issues.
    pub moderate_penalty: f64,
    /// Confidence ceiling for memories flagged with severe issues.
    pub severe_cap: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            stale_after_days: defaults::STALE_AFTER_DAYS,
            recent_within_days: defaults::RECENT_WITHIN_DAYS,
            minor_penalty: defaults::MINOR_PENALTY,
            moderate_penalty: defaults::MODERATE_PENALTY,
            severe_cap: defaults::SEVERE_CAP,
        }
    }
}
