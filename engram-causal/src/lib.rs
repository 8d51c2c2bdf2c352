//! # engram-causal
//!
//! Causal inference between memories and read-only graph services.
//!
//! Inference is strategy-pluggable: each strategy proposes directed,
//! confidence-scored edges and stays read-only — persisting edges is the
//! caller's responsibility. Edges point from a memory toward the earlier
//! memories that explain it, so traversal answers "why did X happen" by
//! following outgoing edges and "what needs updating if X changes" by
//! following incoming ones.

pub mod engine;
pub mod strategies;
pub mod traversal;

pub use engine::InferenceEngine;
pub use strategies::{CausalStrategy, EntityOverlapStrategy, ExplicitReferenceStrategy};
pub use traversal::{explain_chain, impact_set, TraversalNode, TraversalResult};
