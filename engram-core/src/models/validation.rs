use serde::{Deserialize, Serialize};

/// Which validator produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Citation,
    Temporal,
    Contradiction,
    PatternAlignment,
}

/// Issue severity, ordered: Minor < Moderate < Severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

/// A single problem found with a memory. Transient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub dimension: Dimension,
    pub severity: Severity,
    pub description: String,
    pub suggestion: Option<String>,
}

/// Which memories a validation run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationScope {
    #[default]
    All,
    /// Memories not validated recently, or past their half-life.
    Stale,
    /// Memories created within the recent window.
    Recent,
}

/// Final classification of one memory after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Healed,
    Stale,
    Flagged,
}

/// Per-memory validation detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryValidation {
    pub memory_id: String,
    pub outcome: ValidationOutcome,
    pub issues: Vec<ValidationIssue>,
}

/// Counters reported by a validation run. Always populated, even when some
/// memories were skipped due to per-item errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub stale: usize,
    pub healed: usize,
    pub flagged_for_review: usize,
    pub skipped: usize,
    pub details: Vec<MemoryValidation>,
    pub duration_ms: u64,
}
