use serde::{Deserialize, Serialize};

/// Usage and evidence metrics feeding the decay formula.
///
/// Missing or malformed metrics degrade to these defaults — the calculation
/// itself never fails on bad input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageMetrics {
    /// Independent observations supporting the memory.
    pub supporting_evidence: u32,
    /// Observations contradicting the memory.
    pub contradicting_evidence: u32,
    /// Days since the memory was last accessed by a query.
    pub days_since_access: f64,
    /// Days since the memory was last persisted (decay anchor).
    pub days_since_update: f64,
}

impl UsageMetrics {
    /// Replace NaN / negative values with safe defaults.
    pub fn sanitize(mut self) -> Self {
        if !self.days_since_access.is_finite() || self.days_since_access < 0.0 {
            self.days_since_access = 0.0;
        }
        if !self.days_since_update.is_finite() || self.days_since_update < 0.0 {
            self.days_since_update = 0.0;
        }
        self
    }
}

/// Outcome of one decay pass over one memory. Transient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayResult {
    pub memory_id: String,
    pub previous_confidence: f64,
    pub new_confidence: f64,
    /// Confidence fell below the archival threshold. Archival itself is the
    /// batch caller's decision.
    pub should_archive: bool,
    pub needs_validation: bool,
    pub validation_reason: Option<String>,
}
