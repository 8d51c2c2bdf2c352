//! BaseMemory and TypedContent serialization and identity tests.

use engram_core::memory::types::{EpisodeStatus, EpisodicContent, SemanticContent};
use engram_core::memory::{BaseMemory, Confidence, TypedContent};
use proptest::prelude::*;

fn semantic(knowledge: &str) -> TypedContent {
    TypedContent::Semantic(SemanticContent {
        knowledge: knowledge.to_string(),
        topic: "locking".to_string(),
        source_episodes: vec![],
        supporting_evidence: 1,
    })
}

#[test]
fn typed_content_serializes_with_a_type_tag() {
    let content = TypedContent::Episodic(EpisodicContent {
        interaction: "traced a deadlock in the scheduler".to_string(),
        context: "worker pool".to_string(),
        outcome: Some("lock ordering documented".to_string()),
        status: EpisodeStatus::Pending,
    });

    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["type"], "episodic");
    assert_eq!(json["data"]["interaction"], "traced a deadlock in the scheduler");
}

#[test]
fn memory_round_trips_through_json() {
    let memory = BaseMemory::new(
        semantic("locks are acquired in id order"),
        "lock ordering rule",
    )
    .unwrap();

    let json = serde_json::to_string(&memory).unwrap();
    let back: BaseMemory = serde_json::from_str(&json).unwrap();
    assert_eq!(memory, back);
    assert!(memory.content_eq(&back));
}

#[test]
fn content_hash_tracks_content() {
    let a = BaseMemory::compute_content_hash(&semantic("locks are acquired in id order")).unwrap();
    let b = BaseMemory::compute_content_hash(&semantic("locks are acquired in id order")).unwrap();
    let c = BaseMemory::compute_content_hash(&semantic("locks are acquired by seniority")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn identity_is_the_id_not_the_content() {
    let a = BaseMemory::new(semantic("locks are acquired in id order"), "rule").unwrap();
    let mut b = a.clone();
    b.summary = "different summary".to_string();
    assert_eq!(a, b);
    assert!(!a.content_eq(&b));
}

#[test]
fn first_tag_is_the_topic() {
    let mut memory = BaseMemory::new(semantic("locks are acquired in id order"), "rule").unwrap();
    assert_eq!(memory.topic(), None);
    memory.tags = vec!["locking".to_string(), "scheduler".to_string()];
    assert_eq!(memory.topic(), Some("locking"));
}

proptest! {
    #[test]
    fn confidence_is_always_clamped(raw in prop::num::f64::ANY) {
        let confidence = Confidence::new(raw);
        prop_assert!((0.0..=1.0).contains(&confidence.value()));
    }
}
