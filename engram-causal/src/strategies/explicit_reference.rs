//! Explicit reference strategy: one memory names another outright, either
//! through a supersession link or a `ref:<id>` tag.
//!
//! Explicit references are the strongest causal signal available — no
//! similarity estimate is involved, the author connected the two memories
//! on purpose.

use engram_core::errors::EngramResult;
use engram_core::memory::{BaseMemory, CausalEdge, CausalRelation};

use super::CausalStrategy;

/// Confidence for a direct supersession link.
const SUPERSESSION_CONFIDENCE: f64 = 1.0;
/// Confidence for a `ref:<id>` tag.
const REF_TAG_CONFIDENCE: f64 = 0.8;

/// Tag prefix marking an explicit reference to another memory.
pub const REF_TAG_PREFIX: &str = "ref:";

pub struct ExplicitReferenceStrategy;

impl ExplicitReferenceStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExplicitReferenceStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CausalStrategy for ExplicitReferenceStrategy {
    fn name(&self) -> &str {
        "explicit_reference"
    }

    fn infer(
        &self,
        memory: &BaseMemory,
        candidates: &[BaseMemory],
    ) -> EngramResult<Vec<CausalEdge>> {
        let mut edges = Vec::new();
        for candidate in candidates {
            if candidate.id == memory.id {
                continue;
            }

            if memory.supersedes.as_deref() == Some(candidate.id.as_str())
                || memory.superseded_by.as_deref() == Some(candidate.id.as_str())
            {
                edges.push(CausalEdge {
                    source_id: memory.id.clone(),
                    target_id: candidate.id.clone(),
                    relation: CausalRelation::Supersedes,
                    confidence: SUPERSESSION_CONFIDENCE,
                    evidence: vec![
                        format!("strategy:{}", self.name()),
                        "supersession link".to_string(),
                    ],
                });
                continue;
            }

            let ref_tag = format!("{REF_TAG_PREFIX}{}", candidate.id);
            if memory.tags.iter().any(|t| t == &ref_tag) {
                edges.push(CausalEdge {
                    source_id: memory.id.clone(),
                    target_id: candidate.id.clone(),
                    relation: CausalRelation::DerivedFrom,
                    confidence: REF_TAG_CONFIDENCE,
                    evidence: vec![
                        format!("strategy:{}", self.name()),
                        format!("tagged {ref_tag}"),
                    ],
                });
            }
        }

        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engram_core::memory::types::SemanticContent;
    use engram_core::memory::TypedContent;

    fn semantic(id: &str) -> BaseMemory {
        let mut m = BaseMemory::new(
            TypedContent::Semantic(SemanticContent {
                knowledge: "sessions expire after thirty minutes".to_string(),
                topic: "sessions".to_string(),
                source_episodes: vec![],
                supporting_evidence: 1,
            }),
            "session expiry",
        )
        .unwrap();
        m.id = id.to_string();
        m
    }

    #[test]
    fn supersession_link_is_a_full_confidence_edge() {
        let mut memory = semantic("new");
        memory.supersedes = Some("old".to_string());
        let candidate = semantic("old");

        let edges = ExplicitReferenceStrategy::new()
            .infer(&memory, &[candidate])
            .unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relation, CausalRelation::Supersedes);
        assert!((edges[0].confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ref_tag_marks_derivation() {
        let mut memory = semantic("derived");
        memory.tags.push("ref:origin".to_string());
        let candidate = semantic("origin");

        let edges = ExplicitReferenceStrategy::new()
            .infer(&memory, &[candidate])
            .unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relation, CausalRelation::DerivedFrom);
        assert!((edges[0].confidence - 0.8).abs() < 1e-12);
    }

    #[test]
    fn unreferenced_candidates_produce_nothing() {
        let memory = semantic("a");
        let candidate = semantic("b");
        let edges = ExplicitReferenceStrategy::new()
            .infer(&memory, &[candidate])
            .unwrap();
        assert!(edges.is_empty());
    }
}
