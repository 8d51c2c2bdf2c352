use serde::{Deserialize, Serialize};

/// Generalized knowledge abstracted from a group of episodic memories.
///
/// Transient: created per consolidation run, consumed by the integration
/// phase, never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbstractedKnowledge {
    pub topic: String,
    pub knowledge: String,
    pub confidence: f64,
    /// Number of episodes backing this abstraction.
    pub supporting_evidence: u32,
    /// IDs of the episodes this was abstracted from.
    pub source_episodes: Vec<String>,
}

/// Counters reported by a consolidation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsolidationReport {
    pub episodes_processed: usize,
    pub memories_created: usize,
    pub memories_updated: usize,
    pub memories_pruned: usize,
    /// Estimated tokens freed by pruning.
    pub tokens_freed: usize,
    pub duration_ms: u64,
}
