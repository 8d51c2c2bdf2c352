//! DecayEngine — calculation, validation-feedback boosts, archival writes,
//! and the all-memories batch pass.

use chrono::Utc;
use engram_core::config::DecayConfig;
use engram_core::errors::{EngramError, EngramResult};
use engram_core::memory::{half_life_days, BaseMemory, CausalRelation, Confidence};
use engram_core::models::{DecayResult, UsageMetrics};
use engram_core::traits::{MemoryQuery, MemoryStore};
use tracing::{debug, info, warn};

use crate::archival;
use crate::formula;

/// Validation feedback applied to a memory's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostAction {
    /// User confirmed the memory: +0.2, capped at 1.0, stamps last_validated.
    Confirm,
    /// User rejected it: confidence halved.
    Reject,
    /// User modified it: +0.1.
    Modify,
}

/// Outcome of a single decay calculation.
#[derive(Debug, Clone)]
pub struct DecayAssessment {
    pub confidence: f64,
    pub needs_validation: bool,
    pub validation_reason: Option<String>,
}

/// Confidence decay & calibration engine.
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    pub fn new(config: &DecayConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Recompute a memory's confidence from usage/evidence metrics.
    ///
    /// Malformed metrics degrade to defaults inside the formula; this call
    /// never fails on bad input.
    pub fn calculate(&self, memory: &BaseMemory, metrics: &UsageMetrics) -> DecayAssessment {
        let metrics = metrics.clone().sanitize();
        let confidence = formula::compute(memory, &metrics);

        let mut reason = None;
        if confidence < self.config.validation_trigger {
            reason = Some(format!(
                "confidence {:.3} below validation trigger {:.3}",
                confidence, self.config.validation_trigger
            ));
        } else if metrics.contradicting_evidence > 0 {
            reason = Some(format!(
                "{} contradicting observation(s) on record",
                metrics.contradicting_evidence
            ));
        } else {
            let two_half_lives = 2.0 * half_life_days(memory.memory_type) as f64;
            if metrics.days_since_access > two_half_lives {
                reason = Some(format!(
                    "not accessed for {:.0} days (two half-lives)",
                    metrics.days_since_access
                ));
            }
        }

        DecayAssessment {
            confidence,
            needs_validation: reason.is_some(),
            validation_reason: reason,
        }
    }

    /// Apply validation feedback to a memory and persist it.
    pub fn boost(
        &self,
        store: &dyn MemoryStore,
        memory_id: &str,
        action: BoostAction,
    ) -> EngramResult<f64> {
        let mut memory = store.get(memory_id)?.ok_or_else(|| EngramError::NotFound {
            id: memory_id.to_string(),
        })?;

        let previous = memory.confidence.value();
        let now = Utc::now();
        memory.confidence = match action {
            BoostAction::Confirm => {
                memory.last_validated = Some(now);
                Confidence::new(previous + 0.2)
            }
            BoostAction::Reject => Confidence::new(previous * 0.5),
            BoostAction::Modify => Confidence::new(previous + 0.1),
        };
        memory.updated_at = now;
        store.update(&memory)?;

        debug!(
            memory_id,
            ?action,
            previous,
            new = memory.confidence.value(),
            "confidence boost applied"
        );
        Ok(memory.confidence.value())
    }

    /// Archive a memory (reversible). The reason is recorded in the log.
    pub fn archive(
        &self,
        store: &dyn MemoryStore,
        memory_id: &str,
        reason: &str,
    ) -> EngramResult<()> {
        let mut memory = store.get(memory_id)?.ok_or_else(|| EngramError::NotFound {
            id: memory_id.to_string(),
        })?;
        if memory.archived {
            return Ok(());
        }
        memory.archived = true;
        memory.updated_at = Utc::now();
        store.update(&memory)?;
        info!(memory_id, reason, "memory archived");
        Ok(())
    }

    /// Restore a previously archived memory.
    pub fn restore(&self, store: &dyn MemoryStore, memory_id: &str) -> EngramResult<()> {
        let mut memory = store.get(memory_id)?.ok_or_else(|| EngramError::NotFound {
            id: memory_id.to_string(),
        })?;
        if !memory.archived {
            return Ok(());
        }
        memory.archived = false;
        memory.updated_at = Utc::now();
        store.update(&memory)?;
        info!(memory_id, "memory restored");
        Ok(())
    }

    /// Derive decay metrics for a memory from its timestamps and causal edges.
    ///
    /// An edge-fetch failure degrades to zero evidence rather than failing
    /// the calculation.
    pub fn metrics_for(&self, store: &dyn MemoryStore, memory: &BaseMemory) -> UsageMetrics {
        let now = Utc::now();
        let days_since_access =
            (now - memory.last_accessed).num_seconds().max(0) as f64 / 86_400.0;
        let days_since_update = (now - memory.updated_at).num_seconds().max(0) as f64 / 86_400.0;

        let (supporting, contradicting) = match store.edges_for(&memory.id) {
            Ok(edges) => {
                let supporting = edges
                    .iter()
                    .filter(|e| {
                        e.target_id == memory.id
                            && matches!(
                                e.relation,
                                CausalRelation::Supports | CausalRelation::DerivedFrom
                            )
                    })
                    .count() as u32;
                let contradicting = edges
                    .iter()
                    .filter(|e| e.relation == CausalRelation::Contradicts)
                    .count() as u32;
                (supporting, contradicting)
            }
            Err(e) => {
                warn!(memory_id = %memory.id, error = %e, "edge lookup failed, using zero evidence");
                (0, 0)
            }
        };

        UsageMetrics {
            supporting_evidence: supporting,
            contradicting_evidence: contradicting,
            days_since_access,
            days_since_update,
        }
    }

    /// Run decay over every non-archived memory.
    ///
    /// One `DecayResult` per memory, always — a failed persist keeps that
    /// memory's previous confidence in its result and flags it for
    /// validation instead of dropping it from the batch. A change is
    /// persisted only when the delta clears the noise floor.
    pub fn process_all_decay(&self, store: &dyn MemoryStore) -> EngramResult<Vec<DecayResult>> {
        let memories = store.search(&MemoryQuery::default())?;
        let mut results = Vec::with_capacity(memories.len());
        let mut persisted = 0usize;
        let mut skipped = 0usize;

        for memory in memories {
            let metrics = self.metrics_for(store, &memory);
            let assessment = self.calculate(&memory, &metrics);
            let previous = memory.confidence.value();
            let delta = (previous - assessment.confidence).abs();

            if delta > self.config.persistence_epsilon {
                let mut updated = memory.clone();
                updated.confidence = Confidence::new(assessment.confidence);
                updated.updated_at = Utc::now();
                if let Err(e) = store.update(&updated) {
                    warn!(memory_id = %memory.id, error = %e, "decay persist failed");
                    skipped += 1;
                    // The stored confidence is unchanged; report it as-is
                    // rather than the value that failed to land.
                    results.push(DecayResult {
                        memory_id: memory.id.clone(),
                        previous_confidence: previous,
                        new_confidence: previous,
                        should_archive: false,
                        needs_validation: true,
                        validation_reason: Some(format!("decay write failed: {e}")),
                    });
                    continue;
                }
                persisted += 1;
            }

            let decision = archival::evaluate(
                &memory,
                assessment.confidence,
                self.config.archival_threshold,
            );

            results.push(DecayResult {
                memory_id: memory.id.clone(),
                previous_confidence: previous,
                new_confidence: assessment.confidence,
                should_archive: decision.should_archive,
                needs_validation: assessment.needs_validation,
                validation_reason: assessment.validation_reason,
            });
        }

        info!(
            total = results.len(),
            persisted, skipped, "decay batch complete"
        );
        Ok(results)
    }
}
