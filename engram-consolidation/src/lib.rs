//! # engram-consolidation
//!
//! The consolidation orchestrator: turns aging episodic memories into
//! durable semantic knowledge through a 5-phase pipeline —
//! Replay → Abstraction → Integration → Pruning → Strengthening.
//!
//! Dry runs report what would happen without a single store write; pruning
//! archives (never deletes) the consolidated episodes.

pub mod algorithms;
pub mod engine;
pub mod pipeline;

pub use engine::ConsolidationEngine;
