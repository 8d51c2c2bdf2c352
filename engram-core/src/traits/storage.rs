use chrono::{DateTime, Utc};

use crate::errors::EngramResult;
use crate::memory::{BaseMemory, CausalEdge, Importance, MemoryType};

/// Search filter passed to [`MemoryStore::search`].
///
/// All fields are optional; `Default` matches every active memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuery {
    pub types: Vec<MemoryType>,
    /// Topics to match — a memory matches if any of its tags is listed.
    pub topics: Vec<String>,
    pub min_importance: Option<Importance>,
    /// Only memories created at or after this instant.
    pub min_date: Option<DateTime<Utc>>,
    /// Only memories at or below this confidence.
    pub max_confidence: Option<f64>,
    /// Archived memories are excluded unless set.
    pub include_archived: bool,
    pub limit: Option<usize>,
}

impl MemoryQuery {
    /// Query for all active memories of one type.
    pub fn of_type(memory_type: MemoryType) -> Self {
        Self {
            types: vec![memory_type],
            ..Default::default()
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.push(topic.into());
        self
    }
}

/// The persistent memory store. External collaborator: Engram never owns
/// persistence, it only reads and writes through this trait. The store
/// guarantees single-writer-per-id atomicity for each `update` call.
pub trait MemoryStore: Send + Sync {
    // --- CRUD ---
    fn create(&self, memory: &BaseMemory) -> EngramResult<()>;
    fn get(&self, id: &str) -> EngramResult<Option<BaseMemory>>;
    fn update(&self, memory: &BaseMemory) -> EngramResult<()>;
    fn delete(&self, id: &str) -> EngramResult<()>;

    // --- Search ---
    fn search(&self, query: &MemoryQuery) -> EngramResult<Vec<BaseMemory>>;
    fn find_by_file(&self, path: &str) -> EngramResult<Vec<BaseMemory>>;
    fn similarity_search(&self, vector: &[f32], k: usize) -> EngramResult<Vec<BaseMemory>>;

    // --- Causal edges (append-only) ---
    fn add_edge(&self, edge: &CausalEdge) -> EngramResult<()>;
    /// All edges where `id` is source or target.
    fn edges_for(&self, id: &str) -> EngramResult<Vec<CausalEdge>>;
    fn all_edges(&self) -> EngramResult<Vec<CausalEdge>>;
}
