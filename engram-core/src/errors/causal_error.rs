/// Causal graph errors.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("traversal depth exceeded: max {max_depth}, reached {depth}")]
    TraversalDepthExceeded { max_depth: usize, depth: usize },

    #[error("invalid edge {source_id} -> {target_id}: {reason}")]
    InvalidEdge {
        source_id: String,
        target_id: String,
        reason: String,
    },
}
