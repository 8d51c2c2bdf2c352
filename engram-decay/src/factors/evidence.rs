use engram_core::models::UsageMetrics;

/// Evidence balance factor.
///
/// Formula: `clamp(2 × (1 + supporting) / (2 + supporting + contradicting), 0.5, 1.5)`
///
/// Neutral (no evidence either way) → 1.0. Supporting evidence stretches the
/// half-life toward 1.5×; contradicting evidence shrinks it toward 0.5×,
/// making contradicted memories decay up to twice as fast.
pub fn calculate(metrics: &UsageMetrics) -> f64 {
    let supporting = metrics.supporting_evidence as f64;
    let contradicting = metrics.contradicting_evidence as f64;
    let ratio = 2.0 * (1.0 + supporting) / (2.0 + supporting + contradicting);
    ratio.clamp(0.5, 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_evidence_is_one() {
        let f = calculate(&UsageMetrics::default());
        assert!((f - 1.0).abs() < 1e-12);
    }

    #[test]
    fn support_increases_contradiction_decreases() {
        let supported = calculate(&UsageMetrics {
            supporting_evidence: 5,
            ..Default::default()
        });
        let contradicted = calculate(&UsageMetrics {
            contradicting_evidence: 5,
            ..Default::default()
        });
        assert!(supported > 1.0);
        assert!(contradicted < 1.0);
    }
}
