mod entity_overlap;
mod explicit_reference;

pub use entity_overlap::EntityOverlapStrategy;
pub use explicit_reference::{ExplicitReferenceStrategy, REF_TAG_PREFIX};

use engram_core::errors::EngramResult;
use engram_core::memory::{BaseMemory, CausalEdge};

/// A pluggable causal inference strategy.
///
/// Strategies are read-only: they propose edges from one memory toward a set
/// of candidates, and the caller unions the outputs of all registered
/// strategies before persisting.
pub trait CausalStrategy: Send + Sync {
    /// Human-readable strategy name, recorded in edge evidence.
    fn name(&self) -> &str;

    /// Propose edges from `memory` toward `candidates`.
    fn infer(
        &self,
        memory: &BaseMemory,
        candidates: &[BaseMemory],
    ) -> EngramResult<Vec<CausalEdge>>;
}
