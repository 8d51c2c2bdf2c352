//! Healing — automatic repair of minor validation issues.
//!
//! Strategies are validator-specific: citation refresh for citation issues,
//! summary regeneration for empty summaries, a revalidation stamp for minor
//! temporal staleness. A heal attempt either fixes every minor issue or
//! fails as a whole; the engine then falls through to the stale path. A
//! memory is never dropped by healing.

pub mod citation_update;
pub mod summary_regen;

use chrono::Utc;
use engram_core::errors::{EngramError, EngramResult};
use engram_core::memory::BaseMemory;
use engram_core::models::{Dimension, ValidationIssue};

use crate::context::ValidationContext;

/// Attempt to heal all minor issues in place. Returns descriptions of the
/// repairs applied. Errors when any issue has no applicable repair.
pub fn heal(
    memory: &mut BaseMemory,
    issues: &[ValidationIssue],
    ctx: &ValidationContext<'_>,
) -> EngramResult<Vec<String>> {
    let mut applied = Vec::new();

    for issue in issues {
        match issue.dimension {
            Dimension::Citation => {
                if memory.summary.trim().is_empty() {
                    let summary = summary_regen::regenerate(memory);
                    memory.summary = summary;
                    applied.push("regenerated summary".to_string());
                    continue;
                }
                let repairs = citation_update::refresh(memory, ctx);
                if repairs == 0 {
                    return Err(EngramError::HealingFailed {
                        memory_id: memory.id.clone(),
                        reason: format!("no citation repair applied for: {}", issue.description),
                    });
                }
                applied.push(format!("refreshed {repairs} citation(s)"));
            }
            Dimension::Temporal => {
                // Minor temporal staleness heals by revalidation stamping;
                // the temporal clock restarts from last_validated.
                memory.last_validated = Some(Utc::now());
                applied.push("revalidation stamp".to_string());
            }
            Dimension::Contradiction | Dimension::PatternAlignment => {
                // No safe automatic repair for these.
                return Err(EngramError::HealingFailed {
                    memory_id: memory.id.clone(),
                    reason: format!("no healing strategy for {:?}", issue.dimension),
                });
            }
        }
    }

    if applied.is_empty() {
        return Err(EngramError::HealingFailed {
            memory_id: memory.id.clone(),
            reason: "nothing to heal".to_string(),
        });
    }
    Ok(applied)
}
