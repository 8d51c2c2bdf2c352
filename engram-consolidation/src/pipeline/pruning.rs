//! Phase 4: Pruning — archive episodes that were just abstracted.
//!
//! Archival is reversible, so pruning never hard-deletes: the episode is
//! marked Consolidated, archived, and superseded by the semantic memory it
//! fed into.

use chrono::Utc;
use engram_core::constants::CHARS_PER_TOKEN;
use engram_core::errors::EngramResult;
use engram_core::memory::types::EpisodeStatus;
use engram_core::memory::{BaseMemory, TypedContent};
use engram_core::traits::MemoryStore;
use tracing::warn;

/// Result of the pruning phase.
#[derive(Debug, Clone, Default)]
pub struct PruningResult {
    pub pruned: usize,
    pub tokens_freed: usize,
}

/// Archive the given episodes, pointing each at the semantic memory that
/// superseded it. A single failed write is logged and skipped.
pub fn prune(
    store: &dyn MemoryStore,
    episodes: &[BaseMemory],
    superseded_by: &str,
) -> EngramResult<PruningResult> {
    let mut result = PruningResult::default();

    for episode in episodes {
        let mut updated = episode.clone();
        if let TypedContent::Episodic(content) = &mut updated.content {
            content.status = EpisodeStatus::Consolidated;
        }
        updated.archived = true;
        updated.superseded_by = Some(superseded_by.to_string());
        updated.updated_at = Utc::now();
        updated.content_hash = BaseMemory::compute_content_hash(&updated.content)?;

        if let Err(e) = store.update(&updated) {
            warn!(episode_id = %episode.id, error = %e, "prune write failed, skipping");
            continue;
        }
        result.pruned += 1;
        result.tokens_freed += episode.summary.len() / CHARS_PER_TOKEN;
    }

    Ok(result)
}
