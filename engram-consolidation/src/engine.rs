//! ConsolidationEngine — drives the 5-phase pipeline with a single-run
//! guard and per-abstraction error isolation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use engram_core::config::ConsolidationConfig;
use engram_core::errors::{ConsolidationError, EngramResult};
use engram_core::memory::BaseMemory;
use engram_core::models::ConsolidationReport;
use engram_core::traits::MemoryStore;
use tracing::{info, warn};

use crate::pipeline::integration::IntegrationAction;
use crate::pipeline::{abstraction, integration, pruning, replay, strengthening};

pub struct ConsolidationEngine {
    config: ConsolidationConfig,
    /// Guard: only one consolidation can run at a time.
    is_running: AtomicBool,
}

impl ConsolidationEngine {
    pub fn new(config: &ConsolidationConfig) -> Self {
        Self {
            config: config.clone(),
            is_running: AtomicBool::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Run the full pipeline. A dry run reports created = abstraction count
    /// and updated = 0, skips pruning and strengthening, and performs no
    /// store writes.
    pub fn consolidate(
        &self,
        store: &dyn MemoryStore,
        dry_run: bool,
    ) -> EngramResult<ConsolidationReport> {
        if self
            .is_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ConsolidationError::AlreadyRunning.into());
        }

        let result = self.run_pipeline(store, dry_run);
        self.is_running.store(false, Ordering::SeqCst);
        result
    }

    fn run_pipeline(
        &self,
        store: &dyn MemoryStore,
        dry_run: bool,
    ) -> EngramResult<ConsolidationReport> {
        let started = Instant::now();

        // Phase 1: Replay.
        let episodes = replay::select(store, &self.config)?;
        info!(count = episodes.len(), dry_run, "replay selected episodes");

        if episodes.len() < self.config.min_batch_size {
            // Batch too small to be statistically meaningful.
            info!(
                count = episodes.len(),
                minimum = self.config.min_batch_size,
                "batch below minimum, consolidation is a no-op"
            );
            return Ok(ConsolidationReport::default());
        }

        let by_id: HashMap<&str, &BaseMemory> =
            episodes.iter().map(|m| (m.id.as_str(), m)).collect();

        // Phase 2: Abstraction.
        let abstractions = abstraction::abstract_episodes(&episodes, &self.config);
        info!(count = abstractions.len(), "abstraction complete");

        let mut report = ConsolidationReport {
            episodes_processed: episodes.len(),
            ..Default::default()
        };

        if dry_run {
            report.memories_created = abstractions.len();
            report.duration_ms = started.elapsed().as_millis() as u64;
            return Ok(report);
        }

        // Phase 3: Integration. One abstraction failing must not sink the
        // batch — log, skip, carry on.
        for item in &abstractions {
            let action = match integration::integrate(store, item, &self.config) {
                Ok(action) => action,
                Err(e) => {
                    warn!(topic = %item.topic, error = %e, "integration failed, skipping");
                    continue;
                }
            };

            let semantic_id = match &action {
                IntegrationAction::Created { memory_id } => {
                    report.memories_created += 1;
                    memory_id.clone()
                }
                IntegrationAction::Merged { memory_id } => {
                    report.memories_updated += 1;
                    memory_id.clone()
                }
            };

            // Phase 4: Pruning — archive the episodes this abstraction
            // consumed. Same isolation as integration: one abstraction's
            // pruning failure leaves the rest of the batch alone.
            let sources: Vec<BaseMemory> = item
                .source_episodes
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|m| (*m).clone()))
                .collect();
            match pruning::prune(store, &sources, &semantic_id) {
                Ok(pruned) => {
                    report.memories_pruned += pruned.pruned;
                    report.tokens_freed += pruned.tokens_freed;
                }
                Err(e) => {
                    warn!(topic = %item.topic, error = %e, "pruning failed, skipping");
                }
            }
        }

        // Phase 5: Strengthening.
        let strengthened = strengthening::strengthen(store, &self.config)?;
        info!(strengthened, "strengthening complete");

        report.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            episodes = report.episodes_processed,
            created = report.memories_created,
            updated = report.memories_updated,
            pruned = report.memories_pruned,
            tokens_freed = report.tokens_freed,
            "consolidation complete"
        );
        Ok(report)
    }
}
