/// Errors surfaced by a MemoryStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("write conflict on memory {id}")]
    WriteConflict { id: String },

    #[error("malformed record {id}: {reason}")]
    MalformedRecord { id: String, reason: String },
}
