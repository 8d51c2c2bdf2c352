//! Property tests over the entity-overlap strategy.

use engram_causal::{CausalStrategy, EntityOverlapStrategy};
use engram_core::config::InferenceConfig;
use engram_core::memory::BaseMemory;
use proptest::prelude::*;
use test_fixtures::MemoryBuilder;

const FILE_POOL: [&str; 6] = [
    "src/a.rs",
    "src/b.rs",
    "src/c.rs",
    "src/d.rs",
    "src/e.rs",
    "src/f.rs",
];

fn subset_memory(id: &str, mask: u8) -> BaseMemory {
    let mut builder = MemoryBuilder::semantic("shared module ownership notes", "ownership").id(id);
    for (i, path) in FILE_POOL.iter().enumerate() {
        if mask & (1 << i) != 0 {
            builder = builder.file(path);
        }
    }
    builder.build()
}

proptest! {
    #[test]
    fn proposed_edge_confidence_is_bounded(a in 0u8..64, b in 0u8..64) {
        let config = InferenceConfig::default();
        let strategy = EntityOverlapStrategy::new(&config);
        let memory = subset_memory("m", a);
        let candidate = subset_memory("c", b);

        let edges = strategy.infer(&memory, &[candidate]).unwrap();
        for edge in edges {
            prop_assert!(edge.confidence >= config.min_score);
            prop_assert!(edge.confidence <= 1.0);
        }
    }

    #[test]
    fn identical_nonempty_entities_score_full_confidence(a in 1u8..64) {
        let strategy = EntityOverlapStrategy::new(&InferenceConfig::default());
        let memory = subset_memory("m", a);
        let candidate = subset_memory("c", a);

        let edges = strategy.infer(&memory, &[candidate]).unwrap();
        prop_assert_eq!(edges.len(), 1);
        prop_assert!((edges[0].confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_entities_never_produce_edges(a in 0u8..8, b in 0u8..8) {
        let strategy = EntityOverlapStrategy::new(&InferenceConfig::default());
        // Low bits vs high bits: the file sets cannot intersect.
        let memory = subset_memory("m", a);
        let candidate = subset_memory("c", b << 3);

        let edges = strategy.infer(&memory, &[candidate]).unwrap();
        prop_assert!(edges.is_empty());
    }
}
