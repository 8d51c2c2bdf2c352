use serde::{Deserialize, Serialize};

/// The 8 causal relation types between memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausalRelation {
    DerivedFrom,
    Caused,
    Enabled,
    Supports,
    TriggeredBy,
    Supersedes,
    Related,
    Contradicts,
}

impl CausalRelation {
    /// All variants for iteration.
    pub const ALL: [CausalRelation; 8] = [
        Self::DerivedFrom,
        Self::Caused,
        Self::Enabled,
        Self::Supports,
        Self::TriggeredBy,
        Self::Supersedes,
        Self::Related,
        Self::Contradicts,
    ];

    /// Whether this relation carries causal meaning for "why did X happen"
    /// chains. Related and Contradicts are associative, not causal.
    pub fn is_causal(self) -> bool {
        !matches!(self, Self::Related | Self::Contradicts)
    }
}

/// A directed, typed, confidence-scored edge between two memories.
///
/// Edges are append-only: multiple edges may exist per pair, and an edge is
/// never destructively re-derived once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CausalEdge {
    pub source_id: String,
    pub target_id: String,
    pub relation: CausalRelation,
    /// Strength of the causal claim, 0.0–1.0.
    pub confidence: f64,
    /// Evidence supporting this edge.
    pub evidence: Vec<String>,
}
