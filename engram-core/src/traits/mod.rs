mod embedding;
mod storage;

pub use embedding::EmbeddingProvider;
pub use storage::{MemoryQuery, MemoryStore};
