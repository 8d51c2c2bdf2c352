//! The 5-phase consolidation pipeline.
//!
//! Phase 1: Replay → Phase 2: Abstraction → Phase 3: Integration →
//! Phase 4: Pruning → Phase 5: Strengthening. Phases 4–5 are skipped in
//! dry runs.

pub mod abstraction;
pub mod integration;
pub mod pruning;
pub mod replay;
pub mod strengthening;
