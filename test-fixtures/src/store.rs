//! In-memory [`MemoryStore`] with write accounting, so tests can assert
//! that dry runs perform no writes and that per-item failures are skipped.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use engram_core::errors::{EngramResult, StoreError};
use engram_core::memory::{BaseMemory, CausalEdge};
use engram_core::traits::{MemoryQuery, MemoryStore};

#[derive(Default)]
pub struct InMemoryStore {
    memories: Mutex<Vec<BaseMemory>>,
    edges: Mutex<Vec<CausalEdge>>,
    /// IDs whose update calls fail, for catch-and-continue tests.
    failing_updates: Mutex<HashSet<String>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with memories, bypassing write accounting.
    pub fn seed(self, memories: Vec<BaseMemory>) -> Self {
        {
            let mut guard = self.memories.lock().expect("lock");
            guard.extend(memories);
        }
        self
    }

    /// Make updates to `id` fail with a store error.
    pub fn fail_updates_for(&self, id: &str) {
        self.failing_updates
            .lock()
            .expect("lock")
            .insert(id.to_string());
    }

    pub fn write_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
            + self.update_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn memory(&self, id: &str) -> Option<BaseMemory> {
        self.memories
            .lock()
            .expect("lock")
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.lock().expect("lock").len()
    }
}

impl MemoryStore for InMemoryStore {
    fn create(&self, memory: &BaseMemory) -> EngramResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.memories.lock().expect("lock").push(memory.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> EngramResult<Option<BaseMemory>> {
        Ok(self.memory(id))
    }

    fn update(&self, memory: &BaseMemory) -> EngramResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self
            .failing_updates
            .lock()
            .expect("lock")
            .contains(&memory.id)
        {
            return Err(StoreError::WriteConflict {
                id: memory.id.clone(),
            }
            .into());
        }
        let mut guard = self.memories.lock().expect("lock");
        match guard.iter_mut().find(|m| m.id == memory.id) {
            Some(slot) => {
                *slot = memory.clone();
                Ok(())
            }
            None => Err(StoreError::MalformedRecord {
                id: memory.id.clone(),
                reason: "update of unknown id".to_string(),
            }
            .into()),
        }
    }

    fn delete(&self, id: &str) -> EngramResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.memories.lock().expect("lock").retain(|m| m.id != id);
        Ok(())
    }

    fn search(&self, query: &MemoryQuery) -> EngramResult<Vec<BaseMemory>> {
        let guard = self.memories.lock().expect("lock");
        let mut results: Vec<BaseMemory> = guard
            .iter()
            .filter(|m| query.include_archived || !m.archived)
            .filter(|m| query.types.is_empty() || query.types.contains(&m.memory_type))
            .filter(|m| {
                query.topics.is_empty()
                    || m.tags.iter().any(|t| query.topics.contains(t))
            })
            .filter(|m| query.min_importance.map_or(true, |i| m.importance >= i))
            .filter(|m| query.min_date.map_or(true, |d| m.created_at >= d))
            .filter(|m| {
                query
                    .max_confidence
                    .map_or(true, |c| m.confidence.value() <= c)
            })
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            results.truncate(limit);
        }
        Ok(results)
    }

    fn find_by_file(&self, path: &str) -> EngramResult<Vec<BaseMemory>> {
        let guard = self.memories.lock().expect("lock");
        Ok(guard
            .iter()
            .filter(|m| !m.archived && m.linked_files.iter().any(|f| f.file_path == path))
            .cloned()
            .collect())
    }

    fn similarity_search(&self, _vector: &[f32], k: usize) -> EngramResult<Vec<BaseMemory>> {
        // Fixture store has no embeddings; return the first k active memories.
        let guard = self.memories.lock().expect("lock");
        Ok(guard.iter().filter(|m| !m.archived).take(k).cloned().collect())
    }

    fn add_edge(&self, edge: &CausalEdge) -> EngramResult<()> {
        self.edges.lock().expect("lock").push(edge.clone());
        Ok(())
    }

    fn edges_for(&self, id: &str) -> EngramResult<Vec<CausalEdge>> {
        let guard = self.edges.lock().expect("lock");
        Ok(guard
            .iter()
            .filter(|e| e.source_id == id || e.target_id == id)
            .cloned()
            .collect())
    }

    fn all_edges(&self) -> EngramResult<Vec<CausalEdge>> {
        Ok(self.edges.lock().expect("lock").clone())
    }
}
