//! Entity overlap strategy: weighted Jaccard across four entity classes.
//!
//! Files 0.35, functions 0.30, patterns 0.20, constraints 0.15 by default.
//! Classes empty on both sides drop out of the weighted average entirely.

use std::collections::HashSet;

use engram_core::config::InferenceConfig;
use engram_core::errors::EngramResult;
use engram_core::memory::{BaseMemory, CausalEdge, CausalRelation, MemoryType};

use super::CausalStrategy;

/// Per-class overlap ratio, or None when the class is empty on both sides.
#[derive(Debug, Clone, Copy, Default)]
struct ClassOverlaps {
    files: Option<f64>,
    functions: Option<f64>,
    patterns: Option<f64>,
    constraints: Option<f64>,
}

/// Reference inference strategy: memories touching the same code entities
/// are likely causally related.
pub struct EntityOverlapStrategy {
    config: InferenceConfig,
}

impl EntityOverlapStrategy {
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Aggregate overlap score between two memories.
    ///
    /// `Σ(ratio × weight) / Σ(weight of classes non-empty on either side)`.
    /// Returns None when no class is populated on either side.
    fn aggregate(&self, overlaps: &ClassOverlaps) -> Option<f64> {
        let weighted = [
            (overlaps.files, self.config.file_weight),
            (overlaps.functions, self.config.function_weight),
            (overlaps.patterns, self.config.pattern_weight),
            (overlaps.constraints, self.config.constraint_weight),
        ];

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (ratio, weight) in weighted {
            if let Some(ratio) = ratio {
                numerator += ratio * weight;
                denominator += weight;
            }
        }

        if denominator <= 0.0 {
            None
        } else {
            Some(numerator / denominator)
        }
    }

    /// Tie-break the relation type. First match wins.
    fn pick_relation(overlaps: &ClassOverlaps, candidate: &BaseMemory) -> CausalRelation {
        if overlaps.files.unwrap_or(0.0) > 0.5 {
            CausalRelation::DerivedFrom
        } else if overlaps.functions.unwrap_or(0.0) > 0.5 {
            CausalRelation::Caused
        } else if overlaps.patterns.unwrap_or(0.0) > 0.5 {
            CausalRelation::Enabled
        } else if overlaps.constraints.unwrap_or(0.0) > 0.5 {
            CausalRelation::Supports
        } else if candidate.memory_type == MemoryType::Episodic {
            CausalRelation::TriggeredBy
        } else {
            CausalRelation::Supports
        }
    }

    fn overlaps(memory: &BaseMemory, candidate: &BaseMemory) -> ClassOverlaps {
        let files_a: HashSet<&str> = memory
            .linked_files
            .iter()
            .map(|f| f.file_path.as_str())
            .collect();
        let files_b: HashSet<&str> = candidate
            .linked_files
            .iter()
            .map(|f| f.file_path.as_str())
            .collect();

        ClassOverlaps {
            files: jaccard(&files_a, &files_b),
            functions: jaccard(
                &as_set(&memory.linked_functions),
                &as_set(&candidate.linked_functions),
            ),
            patterns: jaccard(
                &as_set(&memory.linked_patterns),
                &as_set(&candidate.linked_patterns),
            ),
            constraints: jaccard(
                &as_set(&memory.linked_constraints),
                &as_set(&candidate.linked_constraints),
            ),
        }
    }
}

impl CausalStrategy for EntityOverlapStrategy {
    fn name(&self) -> &str {
        "entity_overlap"
    }

    fn infer(
        &self,
        memory: &BaseMemory,
        candidates: &[BaseMemory],
    ) -> EngramResult<Vec<CausalEdge>> {
        // No linked entities → nothing to overlap on.
        if !memory.has_linked_entities() {
            return Ok(vec![]);
        }

        let mut edges = Vec::new();
        for candidate in candidates {
            if candidate.id == memory.id || !candidate.has_linked_entities() {
                continue;
            }

            let overlaps = Self::overlaps(memory, candidate);
            let Some(score) = self.aggregate(&overlaps) else {
                continue;
            };
            if score < self.config.min_score {
                continue;
            }

            let relation = Self::pick_relation(&overlaps, candidate);
            let mut evidence = vec![format!("strategy:{}", self.name())];
            for (class, ratio) in [
                ("files", overlaps.files),
                ("functions", overlaps.functions),
                ("patterns", overlaps.patterns),
                ("constraints", overlaps.constraints),
            ] {
                if let Some(ratio) = ratio {
                    evidence.push(format!("{class} overlap {ratio:.2}"));
                }
            }

            edges.push(CausalEdge {
                source_id: memory.id.clone(),
                target_id: candidate.id.clone(),
                relation,
                confidence: score,
                evidence,
            });
        }

        Ok(edges)
    }
}

/// Jaccard over two sets, None when both are empty.
fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> Option<f64> {
    if a.is_empty() && b.is_empty() {
        return None;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    Some(intersection / union)
}

fn as_set(items: &[String]) -> HashSet<&str> {
    items.iter().map(String::as_str).collect()
}
