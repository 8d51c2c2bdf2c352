//! Property tests over the text similarity and abstraction algorithms.

use engram_consolidation::algorithms::text;
use engram_consolidation::pipeline::abstraction;
use engram_core::config::ConsolidationConfig;
use engram_core::memory::BaseMemory;
use proptest::prelude::*;
use test_fixtures::MemoryBuilder;

fn phrase() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{3,8}", 1..8).prop_map(|words| words.join(" "))
}

fn episode_group(confidences: &[f64]) -> Vec<BaseMemory> {
    confidences
        .iter()
        .enumerate()
        .map(|(i, conf)| {
            MemoryBuilder::episodic("connection resets traced to the idle pool reaper")
                .id(&format!("ep{i}"))
                .tag("pooling")
                .confidence(*conf)
                .age_days(10)
                .build()
        })
        .collect()
}

proptest! {
    #[test]
    fn jaccard_is_symmetric_and_bounded(a in phrase(), b in phrase()) {
        let ab = text::jaccard(&a, &b);
        let ba = text::jaccard(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn text_is_always_fully_similar_to_itself(a in phrase()) {
        let self_sim = text::jaccard(&a, &a);
        // Either every word is a stop word / too short (no tokens, 0.0) or
        // the text matches itself exactly.
        prop_assert!(self_sim == 0.0 || (self_sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn abstraction_confidence_is_bounded(
        confidences in proptest::collection::vec(0.0f64..=1.0, 2..8),
    ) {
        let episodes = episode_group(&confidences);
        let abstractions =
            abstraction::abstract_episodes(&episodes, &ConsolidationConfig::default());

        prop_assert_eq!(abstractions.len(), 1);
        let item = &abstractions[0];
        prop_assert!(item.confidence >= 0.0);
        // The evidence bonus never pushes a fresh abstraction above 0.95.
        prop_assert!(item.confidence <= 0.95);
        prop_assert_eq!(item.supporting_evidence as usize, confidences.len());
    }
}
