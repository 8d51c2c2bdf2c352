//! # engram-core
//!
//! Foundation crate for the Engram memory-maintenance system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngramConfig;
pub use errors::{EngramError, EngramResult};
pub use memory::{BaseMemory, CausalEdge, CausalRelation, Confidence, Importance, MemoryType};
