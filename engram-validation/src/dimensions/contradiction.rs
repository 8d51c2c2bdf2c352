//! Contradiction validation: conflicting knowledge with another active
//! memory on the same topic or entities.
//!
//! Detection is polarity-based: two memories about the same subject where
//! one asserts an absolute ("always", "must", "use") and the other its
//! negation ("never", "must not", "avoid"). Subject identity is word-set
//! overlap of the content words after the polarity markers are stripped.

use std::sync::LazyLock;

use engram_core::memory::BaseMemory;
use engram_core::models::{Dimension, Severity, ValidationIssue};
use regex::Regex;

/// Minimum content-word Jaccard for two memories to count as being about
/// the same subject.
const SUBJECT_OVERLAP_THRESHOLD: f64 = 0.3;

static POSITIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(always|must|should|use|prefer)\b").expect("literal regex"));
static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(never|must not|should not|avoid|don't|do not)\b").expect("literal regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
    Neutral,
}

fn polarity(text: &str) -> Polarity {
    // Negative markers win: "do not always" reads as a prohibition.
    if NEGATIVE.is_match(text) {
        Polarity::Negative
    } else if POSITIVE.is_match(text) {
        Polarity::Positive
    } else {
        Polarity::Neutral
    }
}

fn content_words(text: &str) -> std::collections::HashSet<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| w.len() > 2)
        .filter(|w| !POSITIVE.is_match(w) && !NEGATIVE.is_match(w) && w != "not")
        .collect()
}

fn same_subject(a: &str, b: &str) -> bool {
    let words_a = content_words(a);
    let words_b = content_words(b);
    if words_a.is_empty() || words_b.is_empty() {
        return false;
    }
    let intersection = words_a.intersection(&words_b).count() as f64;
    let union = words_a.union(&words_b).count() as f64;
    intersection / union >= SUBJECT_OVERLAP_THRESHOLD
}

/// Whether two memories share a topic tag or a linked file.
fn related(memory: &BaseMemory, other: &BaseMemory) -> bool {
    let shared_topic = memory
        .tags
        .iter()
        .any(|t| other.tags.iter().any(|o| o == t));
    let shared_file = memory.linked_files.iter().any(|f| {
        other
            .linked_files
            .iter()
            .any(|o| o.file_path == f.file_path)
    });
    shared_topic || shared_file
}

pub fn validate(memory: &BaseMemory, candidates: &[BaseMemory]) -> Vec<ValidationIssue> {
    let text = memory.content.knowledge_text();
    let own_polarity = polarity(&text);
    if own_polarity == Polarity::Neutral {
        return vec![];
    }

    let mut issues = Vec::new();
    for other in candidates {
        if other.id == memory.id || other.archived || !related(memory, other) {
            continue;
        }

        let other_text = other.content.knowledge_text();
        let other_polarity = polarity(&other_text);
        if other_polarity == Polarity::Neutral || other_polarity == own_polarity {
            continue;
        }
        if !same_subject(&text, &other_text) {
            continue;
        }

        // A contradiction against a more trusted memory is severe; against a
        // weaker one it still casts doubt.
        let severity = if other.confidence > memory.confidence {
            Severity::Severe
        } else {
            Severity::Moderate
        };

        issues.push(ValidationIssue {
            dimension: Dimension::Contradiction,
            severity,
            description: format!(
                "contradicts memory {} (confidence {})",
                other.id, other.confidence
            ),
            suggestion: Some("review both memories and supersede one".to_string()),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use engram_core::memory::types::TribalContent;
    use engram_core::memory::{Confidence, TypedContent};

    fn tribal(knowledge: &str, confidence: f64, topic: &str) -> BaseMemory {
        let mut m = BaseMemory::new(
            TypedContent::Tribal(TribalContent {
                knowledge: knowledge.to_string(),
                severity: "high".to_string(),
                consequences: vec![],
            }),
            knowledge,
        )
        .unwrap();
        m.confidence = Confidence::new(confidence);
        m.tags.push(topic.to_string());
        m
    }

    #[test]
    fn opposite_absolutes_on_same_topic_contradict() {
        let a = tribal("always use connection pooling for database access", 0.6, "db");
        let b = tribal("never use connection pooling for database access", 0.9, "db");
        let issues = validate(&a, &[b]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Severe);
    }

    #[test]
    fn lower_confidence_opponent_is_moderate() {
        let a = tribal("always use connection pooling for database access", 0.9, "db");
        let b = tribal("never use connection pooling for database access", 0.4, "db");
        let issues = validate(&a, &[b]);
        assert_eq!(issues[0].severity, Severity::Moderate);
    }

    #[test]
    fn different_subjects_do_not_contradict() {
        let a = tribal("always use connection pooling for database access", 0.6, "db");
        let b = tribal("never commit secrets to the repository", 0.9, "db");
        assert!(validate(&a, &[b]).is_empty());
    }

    #[test]
    fn unrelated_topics_are_not_compared() {
        let a = tribal("always use connection pooling for database access", 0.6, "db");
        let b = tribal("never use connection pooling for database access", 0.9, "cache");
        assert!(validate(&a, &[b]).is_empty());
    }
}
