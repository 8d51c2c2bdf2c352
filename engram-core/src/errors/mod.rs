mod causal_error;
mod consolidation_error;
mod store_error;

pub use causal_error::CausalError;
pub use consolidation_error::ConsolidationError;
pub use store_error::StoreError;

/// Top-level error type for the Engram workspace.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error("memory not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Consolidation(#[from] ConsolidationError),

    #[error(transparent)]
    Causal(#[from] CausalError),

    #[error("embedding provider '{provider}' failed: {reason}")]
    Embedding { provider: String, reason: String },

    #[error("healing failed for memory {memory_id}: {reason}")]
    HealingFailed { memory_id: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Workspace-wide result alias.
pub type EngramResult<T> = Result<T, EngramError>;
