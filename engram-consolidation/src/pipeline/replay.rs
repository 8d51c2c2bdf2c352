//! Phase 1: Replay — select pending episodic memories old enough to
//! consolidate, oldest first, capped at the batch maximum.

use chrono::{Duration, Utc};
use engram_core::config::ConsolidationConfig;
use engram_core::errors::EngramResult;
use engram_core::memory::types::EpisodeStatus;
use engram_core::memory::{BaseMemory, MemoryType, TypedContent};
use engram_core::traits::{MemoryQuery, MemoryStore};

/// Whether an episode is still pending consolidation.
fn is_pending(memory: &BaseMemory) -> bool {
    matches!(
        &memory.content,
        TypedContent::Episodic(c) if c.status == EpisodeStatus::Pending
    )
}

/// Select up to `max_batch_size` pending episodes aged at least
/// `min_age_days`. Oldest first, so repeated runs drain the backlog
/// deterministically.
pub fn select(
    store: &dyn MemoryStore,
    config: &ConsolidationConfig,
) -> EngramResult<Vec<BaseMemory>> {
    let cutoff = Utc::now() - Duration::days(config.min_age_days);
    let mut episodes: Vec<BaseMemory> = store
        .search(&MemoryQuery::of_type(MemoryType::Episodic))?
        .into_iter()
        .filter(|m| is_pending(m) && m.created_at <= cutoff && m.superseded_by.is_none())
        .collect();

    episodes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    episodes.truncate(config.max_batch_size);
    Ok(episodes)
}
