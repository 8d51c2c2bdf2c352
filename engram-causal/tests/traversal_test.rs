//! Graph traversal tests: explain chains, impact sets, depth caps, and
//! cycle termination.

use engram_causal::{explain_chain, impact_set};
use engram_core::memory::{CausalEdge, CausalRelation};
use engram_core::traits::MemoryStore;
use test_fixtures::InMemoryStore;

fn edge(source: &str, target: &str, relation: CausalRelation, confidence: f64) -> CausalEdge {
    CausalEdge {
        source_id: source.to_string(),
        target_id: target.to_string(),
        relation,
        confidence,
        evidence: vec![],
    }
}

/// a is explained by b, which is explained by c; a also has an associative
/// link to d.
fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store
        .add_edge(&edge("a", "b", CausalRelation::DerivedFrom, 0.9))
        .unwrap();
    store
        .add_edge(&edge("b", "c", CausalRelation::Caused, 0.8))
        .unwrap();
    store
        .add_edge(&edge("a", "d", CausalRelation::Related, 1.0))
        .unwrap();
    store
}

#[test]
fn explain_chain_walks_toward_causes() {
    let store = seeded_store();
    let result = explain_chain(&store, "a", 10).unwrap();

    let ids: Vec<&str> = result.nodes.iter().map(|n| n.memory_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert_eq!(result.nodes[0].depth, 1);
    assert_eq!(result.nodes[1].depth, 2);
    assert!((result.nodes[1].path_confidence - 0.72).abs() < 1e-9);
    assert_eq!(result.max_depth_reached, 2);
}

#[test]
fn impact_set_walks_toward_dependents() {
    let store = seeded_store();
    let result = impact_set(&store, "c", 10).unwrap();

    let ids: Vec<&str> = result.nodes.iter().map(|n| n.memory_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn associative_relations_do_not_join_chains() {
    let store = seeded_store();
    let result = explain_chain(&store, "a", 10).unwrap();
    assert!(result.nodes.iter().all(|n| n.memory_id != "d"));
}

#[test]
fn depth_cap_limits_the_walk() {
    let store = seeded_store();
    let result = explain_chain(&store, "a", 1).unwrap();

    let ids: Vec<&str> = result.nodes.iter().map(|n| n.memory_id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
    assert_eq!(result.max_depth_reached, 1);
}

#[test]
fn cycles_terminate() {
    let store = seeded_store();
    store
        .add_edge(&edge("c", "a", CausalRelation::Caused, 0.5))
        .unwrap();

    let result = explain_chain(&store, "a", 50).unwrap();
    // The origin is never revisited, each node appears once.
    assert_eq!(result.nodes.len(), 2);
}

#[test]
fn unknown_origin_yields_an_empty_result() {
    let store = seeded_store();
    let result = explain_chain(&store, "nope", 10).unwrap();
    assert_eq!(result.origin_id, "nope");
    assert!(result.nodes.is_empty());
    assert_eq!(result.max_depth_reached, 0);
}
