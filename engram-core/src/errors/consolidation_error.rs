/// Consolidation pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum ConsolidationError {
    #[error("consolidation already in progress")]
    AlreadyRunning,

    #[error("integration failed for topic '{topic}': {reason}")]
    IntegrationFailed { topic: String, reason: String },

    #[error("abstraction produced no knowledge for topic '{topic}'")]
    EmptyAbstraction { topic: String },
}
