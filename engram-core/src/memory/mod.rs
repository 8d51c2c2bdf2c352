pub mod base;
pub mod confidence;
pub mod edges;
pub mod half_lives;
pub mod importance;
pub mod links;
pub mod types;

pub use base::{BaseMemory, TypedContent};
pub use confidence::Confidence;
pub use edges::{CausalEdge, CausalRelation};
pub use half_lives::half_life_days;
pub use importance::Importance;
pub use links::FileLink;
pub use types::{EpisodeStatus, MemoryType};
