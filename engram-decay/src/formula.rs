use engram_core::memory::{half_life_days, BaseMemory};
use engram_core::models::UsageMetrics;

use crate::factors;

/// Half-life decay anchored at the last persisted state.
///
/// ```text
/// effectiveHalfLife = baseHalfLife(type)
///   × usageFactor
///   × evidenceFactor
///   × importanceFactor
///
/// newConfidence = confidence × e^(-daysSinceUpdate / effectiveHalfLife)
/// ```
///
/// Result is clamped to [0.0, 1.0]. Because the exponent is measured from
/// the last persisted update, recomputing immediately after a persist yields
/// the same value — batch decay is idempotent between state changes.
pub fn compute(memory: &BaseMemory, metrics: &UsageMetrics) -> f64 {
    let metrics = metrics.clone().sanitize();
    let base = memory.confidence.value();

    let usage = factors::usage::calculate(memory);
    let evidence = factors::evidence::calculate(&metrics);
    let importance = factors::importance::calculate(memory);

    let effective_half_life = half_life_days(memory.memory_type) as f64
        * usage
        * evidence
        * importance;

    let decayed = base * (-metrics.days_since_update / effective_half_life).exp();
    decayed.clamp(0.0, 1.0)
}

/// Per-factor breakdown for debugging and observability.
#[derive(Debug, Clone)]
pub struct DecayBreakdown {
    pub base_confidence: f64,
    pub usage: f64,
    pub evidence: f64,
    pub importance: f64,
    pub effective_half_life_days: f64,
    pub final_confidence: f64,
}

/// Compute decay with a full breakdown of each factor.
pub fn compute_breakdown(memory: &BaseMemory, metrics: &UsageMetrics) -> DecayBreakdown {
    let metrics = metrics.clone().sanitize();
    let base = memory.confidence.value();
    let usage = factors::usage::calculate(memory);
    let evidence = factors::evidence::calculate(&metrics);
    let importance = factors::importance::calculate(memory);
    let effective_half_life =
        half_life_days(memory.memory_type) as f64 * usage * evidence * importance;
    let final_confidence =
        (base * (-metrics.days_since_update / effective_half_life).exp()).clamp(0.0, 1.0);

    DecayBreakdown {
        base_confidence: base,
        usage,
        evidence,
        importance,
        effective_half_life_days: effective_half_life,
        final_confidence,
    }
}
