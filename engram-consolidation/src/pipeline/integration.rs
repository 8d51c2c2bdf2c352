//! Phase 3: Integration — merge each abstraction into an existing semantic
//! memory when their knowledge overlaps enough, otherwise create a new one.

use chrono::Utc;
use engram_core::config::ConsolidationConfig;
use engram_core::errors::{ConsolidationError, EngramResult};
use engram_core::memory::types::SemanticContent;
use engram_core::memory::{BaseMemory, Confidence, MemoryType, TypedContent};
use engram_core::models::AbstractedKnowledge;
use engram_core::traits::{MemoryQuery, MemoryStore};

/// What integration did with one abstraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationAction {
    Created { memory_id: String },
    Merged { memory_id: String },
}

/// Integrate one abstraction against the store.
///
/// Searches semantic memories sharing the abstraction's topic and compares
/// word-set Jaccard against each candidate's knowledge. The best candidate
/// above the merge threshold absorbs the abstraction: confidence becomes the
/// max of the two, supporting evidence sums, and provenance appends the new
/// source episodes. With no candidate above threshold, a fresh semantic
/// memory is created at the abstraction's confidence.
pub fn integrate(
    store: &dyn MemoryStore,
    abstraction: &AbstractedKnowledge,
    config: &ConsolidationConfig,
) -> EngramResult<IntegrationAction> {
    if abstraction.knowledge.trim().is_empty() {
        return Err(ConsolidationError::EmptyAbstraction {
            topic: abstraction.topic.clone(),
        }
        .into());
    }

    let candidates = store.search(
        &MemoryQuery::of_type(MemoryType::Semantic).with_topic(&abstraction.topic),
    )?;

    let mut best: Option<(BaseMemory, f64)> = None;
    for candidate in candidates {
        let TypedContent::Semantic(content) = &candidate.content else {
            continue;
        };
        let similarity =
            crate::algorithms::text::jaccard(&abstraction.knowledge, &content.knowledge);
        if similarity > config.merge_threshold
            && best.as_ref().map_or(true, |(_, s)| similarity > *s)
        {
            best = Some((candidate, similarity));
        }
    }

    match best {
        Some((mut existing, _)) => {
            if let TypedContent::Semantic(content) = &mut existing.content {
                content.supporting_evidence += abstraction.supporting_evidence;
                content
                    .source_episodes
                    .extend(abstraction.source_episodes.iter().cloned());
            }
            let merged_confidence = existing.confidence.value().max(abstraction.confidence);
            existing.confidence = Confidence::new(merged_confidence);
            existing.content_hash = BaseMemory::compute_content_hash(&existing.content)?;
            existing.updated_at = Utc::now();
            store.update(&existing)?;
            Ok(IntegrationAction::Merged {
                memory_id: existing.id,
            })
        }
        None => {
            let content = TypedContent::Semantic(SemanticContent {
                knowledge: abstraction.knowledge.clone(),
                topic: abstraction.topic.clone(),
                source_episodes: abstraction.source_episodes.clone(),
                supporting_evidence: abstraction.supporting_evidence,
            });
            let mut memory = BaseMemory::new(content, summarize(&abstraction.knowledge))?;
            memory.confidence = Confidence::new(abstraction.confidence);
            memory.tags.push(abstraction.topic.clone());
            store.create(&memory)?;
            Ok(IntegrationAction::Created {
                memory_id: memory.id,
            })
        }
    }
}

fn summarize(knowledge: &str) -> String {
    const MAX_CHARS: usize = 120;
    let trimmed = knowledge.trim();
    if trimmed.len() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let mut cut = MAX_CHARS;
    while cut > 0 && !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    trimmed[..cut].to_string()
}
