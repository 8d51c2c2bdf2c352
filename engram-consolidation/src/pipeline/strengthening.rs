//! Phase 5: Strengthening — frequently accessed memories earn a confidence
//! boost proportional to their access count, bounded to [0, 1].

use chrono::Utc;
use engram_core::config::ConsolidationConfig;
use engram_core::errors::EngramResult;
use engram_core::memory::Confidence;
use engram_core::traits::{MemoryQuery, MemoryStore};
use tracing::warn;

/// Boost per access, capped.
const BOOST_PER_ACCESS: f64 = 0.01;
const MAX_BOOST: f64 = 0.1;

/// Boost every active memory at or above the frequent-access threshold.
/// Returns the number of memories strengthened.
pub fn strengthen(
    store: &dyn MemoryStore,
    config: &ConsolidationConfig,
) -> EngramResult<usize> {
    let memories = store.search(&MemoryQuery::default())?;
    let mut strengthened = 0;

    for memory in memories {
        if memory.access_count < config.frequent_access_threshold {
            continue;
        }
        let boost = (BOOST_PER_ACCESS * memory.access_count as f64).min(MAX_BOOST);
        let boosted = Confidence::new(memory.confidence.value() + boost);
        if boosted == memory.confidence {
            continue; // Already at the ceiling.
        }

        let mut updated = memory.clone();
        updated.confidence = boosted;
        updated.updated_at = Utc::now();
        if let Err(e) = store.update(&updated) {
            warn!(memory_id = %memory.id, error = %e, "strengthen write failed, skipping");
            continue;
        }
        strengthened += 1;
    }

    Ok(strengthened)
}
