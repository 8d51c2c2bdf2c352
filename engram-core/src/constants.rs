/// Engram system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum traversal depth for causal graph queries.
pub const MAX_TRAVERSAL_DEPTH: usize = 50;

/// Rough token estimate: 1 token ≈ 4 characters of summary text.
pub const CHARS_PER_TOKEN: usize = 4;

/// Tag applied to memories flagged for human review.
pub const NEEDS_REVIEW_TAG: &str = "needs-review";
