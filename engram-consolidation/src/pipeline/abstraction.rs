//! Phase 2: Abstraction — group episodes by topic and knowledge similarity
//! into generalized knowledge items.
//!
//! Grouping is greedy within a topic: the first ungrouped episode seeds a
//! group, and later episodes join when their knowledge text clears the
//! grouping threshold against the seed. Singleton groups are left pending —
//! one observation is an anecdote, not knowledge.

use std::collections::BTreeMap;

use engram_core::config::ConsolidationConfig;
use engram_core::memory::BaseMemory;
use engram_core::models::AbstractedKnowledge;

use crate::algorithms::{text, topics};

/// Confidence bonus per additional supporting episode.
const EVIDENCE_BONUS: f64 = 0.05;
/// Abstractions never start above this confidence.
const MAX_ABSTRACTION_CONFIDENCE: f64 = 0.95;

/// Abstract a replay batch into knowledge items.
pub fn abstract_episodes(
    episodes: &[BaseMemory],
    config: &ConsolidationConfig,
) -> Vec<AbstractedKnowledge> {
    // BTreeMap keeps topic iteration order stable across runs.
    let mut by_topic: BTreeMap<String, Vec<&BaseMemory>> = BTreeMap::new();
    for episode in episodes {
        by_topic
            .entry(topics::topic_of(episode))
            .or_default()
            .push(episode);
    }

    let mut abstractions = Vec::new();
    for (topic, members) in by_topic {
        for group in group_by_similarity(&members, config.grouping_threshold) {
            if group.len() < 2 {
                continue;
            }
            abstractions.push(to_knowledge(&topic, &group));
        }
    }
    abstractions
}

/// Greedy seed-based grouping by word-set Jaccard.
fn group_by_similarity<'a>(
    members: &[&'a BaseMemory],
    threshold: f64,
) -> Vec<Vec<&'a BaseMemory>> {
    let mut groups: Vec<Vec<&BaseMemory>> = Vec::new();
    let mut grouped = vec![false; members.len()];

    for i in 0..members.len() {
        if grouped[i] {
            continue;
        }
        grouped[i] = true;
        let seed_text = members[i].content.knowledge_text();
        let mut group = vec![members[i]];

        for j in (i + 1)..members.len() {
            if grouped[j] {
                continue;
            }
            let candidate_text = members[j].content.knowledge_text();
            if text::jaccard(&seed_text, &candidate_text) >= threshold {
                grouped[j] = true;
                group.push(members[j]);
            }
        }
        groups.push(group);
    }
    groups
}

fn to_knowledge(topic: &str, group: &[&BaseMemory]) -> AbstractedKnowledge {
    // The most detailed member text stands in for the generalization.
    let knowledge = group
        .iter()
        .map(|m| m.content.knowledge_text())
        .max_by_key(String::len)
        .unwrap_or_default();

    let mean_confidence =
        group.iter().map(|m| m.confidence.value()).sum::<f64>() / group.len() as f64;
    let confidence = (mean_confidence + EVIDENCE_BONUS * (group.len() - 1) as f64)
        .min(MAX_ABSTRACTION_CONFIDENCE);

    AbstractedKnowledge {
        topic: topic.to_string(),
        knowledge,
        confidence,
        supporting_evidence: group.len() as u32,
        source_episodes: group.iter().map(|m| m.id.clone()).collect(),
    }
}
