//! ValidationEngine — runs all four validators per memory, classifies by
//! max severity, heals minor issues on request, and decays or flags the
//! rest.

use std::time::Instant;

use chrono::{Duration, Utc};
use engram_core::config::ValidationConfig;
use engram_core::constants::NEEDS_REVIEW_TAG;
use engram_core::errors::EngramResult;
use engram_core::memory::{BaseMemory, Confidence};
use engram_core::models::{
    MemoryValidation, Severity, ValidationIssue, ValidationOutcome, ValidationReport,
    ValidationScope,
};
use engram_core::traits::{MemoryQuery, MemoryStore};
use tracing::{debug, info, warn};

use crate::context::ValidationContext;
use crate::dimensions::{citation, contradiction, pattern_alignment, temporal};
use crate::healing;

pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run all four validators against one memory. The memory is not
    /// mutated; `candidates` is the active set used for contradiction
    /// detection.
    pub fn collect_issues(
        &self,
        memory: &BaseMemory,
        candidates: &[BaseMemory],
        ctx: &ValidationContext<'_>,
    ) -> Vec<ValidationIssue> {
        let mut issues = citation::validate(memory, ctx);
        issues.extend(temporal::validate(memory, Utc::now()));
        issues.extend(contradiction::validate(memory, candidates));
        issues.extend(pattern_alignment::validate(memory, ctx));
        issues
    }

    /// Validate every memory in scope, healing minor issues when
    /// `auto_heal` is set.
    ///
    /// Single-item failures are logged, counted as skipped, and never abort
    /// the batch; the report always carries full counts.
    pub fn validate(
        &self,
        store: &dyn MemoryStore,
        scope: ValidationScope,
        auto_heal: bool,
        ctx: &ValidationContext<'_>,
    ) -> EngramResult<ValidationReport> {
        let started = Instant::now();
        let all_active = store.search(&MemoryQuery::default())?;
        let in_scope = self.select_scope(&all_active, scope);

        let mut report = ValidationReport {
            total: in_scope.len(),
            ..Default::default()
        };

        for memory in in_scope {
            let issues = self.collect_issues(&memory, &all_active, ctx);
            match self.apply_outcome(store, memory, issues, auto_heal, ctx) {
                Ok(detail) => {
                    match detail.outcome {
                        ValidationOutcome::Valid => report.valid += 1,
                        ValidationOutcome::Healed => report.healed += 1,
                        ValidationOutcome::Stale => report.stale += 1,
                        ValidationOutcome::Flagged => report.flagged_for_review += 1,
                    }
                    report.details.push(detail);
                }
                Err(e) => {
                    warn!(error = %e, "validation item failed, skipping");
                    report.skipped += 1;
                }
            }
        }

        report.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            total = report.total,
            valid = report.valid,
            stale = report.stale,
            healed = report.healed,
            flagged = report.flagged_for_review,
            skipped = report.skipped,
            "validation run complete"
        );
        Ok(report)
    }

    /// Validation with a no-op context: temporal and contradiction checks
    /// only have teeth; citations and patterns are assumed intact.
    pub fn validate_basic(
        &self,
        store: &dyn MemoryStore,
        scope: ValidationScope,
        auto_heal: bool,
    ) -> EngramResult<ValidationReport> {
        self.validate(store, scope, auto_heal, &ValidationContext::noop())
    }

    fn select_scope(&self, memories: &[BaseMemory], scope: ValidationScope) -> Vec<BaseMemory> {
        let now = Utc::now();
        match scope {
            ValidationScope::All => memories.to_vec(),
            ValidationScope::Stale => {
                let cutoff = now - Duration::days(self.config.stale_after_days);
                memories
                    .iter()
                    .filter(|m| match m.last_validated {
                        Some(validated) => validated < cutoff,
                        None => m.created_at < cutoff,
                    })
                    .cloned()
                    .collect()
            }
            ValidationScope::Recent => {
                let cutoff = now - Duration::days(self.config.recent_within_days);
                memories
                    .iter()
                    .filter(|m| m.created_at >= cutoff)
                    .cloned()
                    .collect()
            }
        }
    }

    /// The severity decision table.
    ///
    /// | max severity | autoHeal | outcome                                   |
    /// |--------------|----------|-------------------------------------------|
    /// | none         | —        | valid                                      |
    /// | minor        | true     | heal; on failure → stale                   |
    /// | minor        | false    | stale (confidence ×0.9)                    |
    /// | moderate     | any      | stale (confidence ×0.7)                    |
    /// | severe       | any      | flagged (capped 0.3, tagged needs-review)  |
    fn apply_outcome(
        &self,
        store: &dyn MemoryStore,
        mut memory: BaseMemory,
        issues: Vec<ValidationIssue>,
        auto_heal: bool,
        ctx: &ValidationContext<'_>,
    ) -> EngramResult<MemoryValidation> {
        let memory_id = memory.id.clone();
        let max_severity = issues.iter().map(|i| i.severity).max();

        let outcome = match max_severity {
            None => ValidationOutcome::Valid,
            Some(Severity::Minor) if auto_heal => {
                match healing::heal(&mut memory, &issues, ctx) {
                    Ok(applied) => {
                        memory.last_validated = Some(Utc::now());
                        memory.updated_at = Utc::now();
                        store.update(&memory)?;
                        debug!(memory_id = %memory_id, ?applied, "memory healed");
                        ValidationOutcome::Healed
                    }
                    Err(e) => {
                        debug!(memory_id = %memory_id, error = %e, "heal failed, marking stale");
                        self.mark_stale(store, &mut memory, self.config.minor_penalty)?;
                        ValidationOutcome::Stale
                    }
                }
            }
            Some(Severity::Minor) => {
                self.mark_stale(store, &mut memory, self.config.minor_penalty)?;
                ValidationOutcome::Stale
            }
            Some(Severity::Moderate) => {
                self.mark_stale(store, &mut memory, self.config.moderate_penalty)?;
                ValidationOutcome::Stale
            }
            Some(Severity::Severe) => {
                let capped = memory.confidence.value().min(self.config.severe_cap);
                memory.confidence = Confidence::new(capped);
                if !memory.tags.iter().any(|t| t == NEEDS_REVIEW_TAG) {
                    memory.tags.push(NEEDS_REVIEW_TAG.to_string());
                }
                memory.updated_at = Utc::now();
                store.update(&memory)?;
                ValidationOutcome::Flagged
            }
        };

        Ok(MemoryValidation {
            memory_id,
            outcome,
            issues,
        })
    }

    fn mark_stale(
        &self,
        store: &dyn MemoryStore,
        memory: &mut BaseMemory,
        penalty: f64,
    ) -> EngramResult<()> {
        memory.confidence = memory.confidence * penalty;
        memory.updated_at = Utc::now();
        store.update(memory)
    }
}
