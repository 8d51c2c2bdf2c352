//! InferenceEngine — ordered strategy registry; unions strategy outputs.

use engram_core::errors::EngramResult;
use engram_core::memory::{BaseMemory, CausalEdge};
use engram_core::traits::MemoryStore;
use tracing::{debug, warn};

use crate::strategies::CausalStrategy;

/// Runs every registered strategy against a memory and unions the proposals.
///
/// Outputs are not deduplicated: multiple edges per pair are allowed and
/// edges are append-only once persisted.
pub struct InferenceEngine {
    strategies: Vec<Box<dyn CausalStrategy>>,
}

impl InferenceEngine {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Register a strategy. Order is preserved in the unioned output.
    pub fn register(mut self, strategy: Box<dyn CausalStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Run all strategies and union their proposed edges.
    ///
    /// A single strategy failure is logged and skipped; the remaining
    /// strategies still contribute.
    pub fn infer_all(
        &self,
        memory: &BaseMemory,
        candidates: &[BaseMemory],
    ) -> Vec<CausalEdge> {
        let mut edges = Vec::new();
        for strategy in &self.strategies {
            match strategy.infer(memory, candidates) {
                Ok(proposed) => {
                    debug!(
                        strategy = strategy.name(),
                        count = proposed.len(),
                        memory_id = %memory.id,
                        "strategy proposals"
                    );
                    edges.extend(proposed);
                }
                Err(e) => {
                    warn!(strategy = strategy.name(), error = %e, "strategy failed, skipping");
                }
            }
        }
        edges
    }

    /// Persist proposed edges (append-only). Returns the number written;
    /// a single edge failure is logged and skipped.
    pub fn persist(&self, store: &dyn MemoryStore, edges: &[CausalEdge]) -> EngramResult<usize> {
        let mut written = 0;
        for edge in edges {
            match store.add_edge(edge) {
                Ok(()) => written += 1,
                Err(e) => {
                    warn!(
                        source = %edge.source_id,
                        target = %edge.target_id,
                        error = %e,
                        "edge persist failed, skipping"
                    );
                }
            }
        }
        Ok(written)
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}
