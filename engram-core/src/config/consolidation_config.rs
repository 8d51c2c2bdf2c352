use serde::{Deserialize, Serialize};

use super::defaults;

/// Consolidation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Maximum episodes replayed per run.
    pub max_batch_size: usize,
    /// Below this many eligible episodes, consolidation is a no-op.
    pub min_batch_size: usize,
    /// Minimum episode age in days before it is eligible for replay.
    pub min_age_days: i64,
    /// Word-set Jaccard above which an abstraction merges into an existing
    /// semantic memory instead of creating a new one.
    pub merge_threshold: f64,
    /// Word-set Jaccard above which same-topic episodes group together.
    pub grouping_threshold: f64,
    /// Access count at which strengthening boosts a memory.
    pub frequent_access_threshold: u64,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            max_batch_size: defaults::MAX_BATCH_SIZE,
            min_batch_size: defaults::MIN_BATCH_SIZE,
            min_age_days: defaults::MIN_AGE_DAYS,
            merge_threshold: defaults::MERGE_THRESHOLD,
            grouping_threshold: defaults::GROUPING_THRESHOLD,
            frequent_access_threshold: defaults::FREQUENT_ACCESS_THRESHOLD,
        }
    }
}
