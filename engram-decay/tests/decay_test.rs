//! Decay engine integration tests: validation-feedback boosts, the batch
//! pass, archival candidacy, and idempotence between state changes.

use engram_core::config::DecayConfig;
use engram_core::errors::EngramError;
use engram_core::memory::{CausalEdge, CausalRelation};
use engram_core::models::UsageMetrics;
use engram_core::traits::MemoryStore;
use engram_decay::{BoostAction, DecayEngine};
use test_fixtures::{init_tracing, InMemoryStore, MemoryBuilder};

fn engine() -> DecayEngine {
    DecayEngine::new(&DecayConfig::default())
}

#[test]
fn reject_halves_confidence() {
    let store = InMemoryStore::new().seed(vec![MemoryBuilder::semantic(
        "use connection pooling for postgres access",
        "database",
    )
    .id("m1")
    .confidence(0.8)
    .build()]);

    let new = engine().boost(&store, "m1", BoostAction::Reject).unwrap();
    assert!((new - 0.4).abs() < 1e-9);
    assert!((store.memory("m1").unwrap().confidence.value() - 0.4).abs() < 1e-9);
}

#[test]
fn confirm_caps_at_one_and_stamps_validation() {
    let store = InMemoryStore::new().seed(vec![MemoryBuilder::tribal(
        "never bypass the migration review checklist",
    )
    .id("m1")
    .confidence(0.95)
    .build()]);

    let new = engine().boost(&store, "m1", BoostAction::Confirm).unwrap();
    assert!((new - 1.0).abs() < 1e-9);

    let confirmed = store.memory("m1").unwrap();
    assert!(confirmed.last_validated.is_some());
}

#[test]
fn modify_applies_a_small_boost() {
    let store = InMemoryStore::new().seed(vec![MemoryBuilder::semantic(
        "api handlers return problem+json errors",
        "api",
    )
    .id("m1")
    .confidence(0.5)
    .build()]);

    let new = engine().boost(&store, "m1", BoostAction::Modify).unwrap();
    assert!((new - 0.6).abs() < 1e-9);
    // Modify does not count as a validation.
    assert!(store.memory("m1").unwrap().last_validated.is_none());
}

#[test]
fn boost_on_unknown_memory_is_not_found() {
    let store = InMemoryStore::new();
    let err = engine()
        .boost(&store, "ghost", BoostAction::Confirm)
        .unwrap_err();
    assert!(matches!(err, EngramError::NotFound { .. }));
}

#[test]
fn one_half_life_of_staleness_decays_by_e() {
    // Episodic half-life is 30 days; no usage, evidence, or importance
    // adjustments apply here.
    let memory = MemoryBuilder::episodic("debugged the flaky login test")
        .confidence(0.8)
        .age_days(30)
        .build();
    let metrics = UsageMetrics {
        days_since_access: 30.0,
        days_since_update: 30.0,
        ..Default::default()
    };

    let assessment = engine().calculate(&memory, &metrics);
    let expected = 0.8 * (-1.0f64).exp();
    assert!((assessment.confidence - expected).abs() < 1e-9);
}

#[test]
fn contradicting_evidence_requests_validation() {
    let memory = MemoryBuilder::semantic("sessions are stored in redis", "sessions")
        .confidence(0.9)
        .build();
    let metrics = UsageMetrics {
        contradicting_evidence: 2,
        ..Default::default()
    };

    let assessment = engine().calculate(&memory, &metrics);
    assert!(assessment.needs_validation);
    assert!(assessment
        .validation_reason
        .unwrap()
        .contains("contradicting"));
}

#[test]
fn low_confidence_trips_the_validation_trigger() {
    let memory = MemoryBuilder::episodic("one-off workaround for the staging cert")
        .confidence(0.3)
        .age_days(30)
        .build();
    let metrics = UsageMetrics {
        days_since_access: 30.0,
        days_since_update: 30.0,
        ..Default::default()
    };

    let assessment = engine().calculate(&memory, &metrics);
    assert!(assessment.confidence < 0.3);
    assert!(assessment
        .validation_reason
        .unwrap()
        .contains("below validation trigger"));
}

#[test]
fn batch_decay_is_idempotent_between_state_changes() {
    init_tracing();
    let store = InMemoryStore::new().seed(vec![MemoryBuilder::episodic(
        "investigated oom kills in the worker pool",
    )
    .id("e1")
    .confidence(0.9)
    .age_days(30)
    .build()]);
    let engine = engine();

    let first = engine.process_all_decay(&store).unwrap();
    assert_eq!(first.len(), 1);
    assert!(first[0].new_confidence < first[0].previous_confidence);
    let writes_after_first = store.write_count();
    assert_eq!(writes_after_first, 1);

    // The formula is anchored at the last persisted update, so an immediate
    // second pass lands below the persistence noise floor.
    let second = engine.process_all_decay(&store).unwrap();
    let delta = (second[0].new_confidence - second[0].previous_confidence).abs();
    assert!(delta < DecayConfig::default().persistence_epsilon);
    assert_eq!(store.write_count(), writes_after_first);
}

#[test]
fn deep_decay_marks_archival_candidacy() {
    let store = InMemoryStore::new().seed(vec![MemoryBuilder::episodic(
        "paired on the onboarding flow rewrite",
    )
    .id("e1")
    .confidence(0.5)
    .age_days(300)
    .build()]);

    let results = engine().process_all_decay(&store).unwrap();
    assert!(results[0].should_archive);
    assert!(results[0].new_confidence < 0.1);
    // Candidacy only; the memory itself stays active.
    assert!(!store.memory("e1").unwrap().archived);
}

#[test]
fn archived_memories_are_excluded_from_batch_decay() {
    let store = InMemoryStore::new().seed(vec![MemoryBuilder::episodic("retired note")
        .id("e1")
        .confidence(0.4)
        .age_days(200)
        .archived()
        .build()]);

    let results = engine().process_all_decay(&store).unwrap();
    assert!(results.is_empty());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn single_write_failure_does_not_abort_the_batch() {
    let store = InMemoryStore::new().seed(vec![
        MemoryBuilder::episodic("triaged the search latency regression")
            .id("e1")
            .confidence(0.9)
            .age_days(30)
            .build(),
        MemoryBuilder::episodic("profiled the indexing hot path")
            .id("e2")
            .confidence(0.9)
            .age_days(30)
            .build(),
    ]);
    store.fail_updates_for("e1");

    // One result per non-archived memory, even when a persist fails.
    let results = engine().process_all_decay(&store).unwrap();
    assert_eq!(results.len(), 2);

    let failed = results.iter().find(|r| r.memory_id == "e1").unwrap();
    // The stored confidence did not change, so the result reports it as-is
    // and asks for validation instead.
    assert!((failed.new_confidence - failed.previous_confidence).abs() < 1e-12);
    assert!((failed.new_confidence - 0.9).abs() < 1e-9);
    assert!(failed.needs_validation);
    assert!(failed.validation_reason.as_deref().unwrap().contains("write failed"));
    assert!((store.memory("e1").unwrap().confidence.value() - 0.9).abs() < 1e-9);

    let succeeded = results.iter().find(|r| r.memory_id == "e2").unwrap();
    assert!(succeeded.new_confidence < 0.9);
    assert!(store.memory("e2").unwrap().confidence.value() < 0.9);
}

#[test]
fn metrics_derive_evidence_from_causal_edges() {
    let memory = MemoryBuilder::semantic("deploys go through the canary stage", "deploys")
        .id("m")
        .build();
    let store = InMemoryStore::new().seed(vec![memory.clone()]);

    let edge = |source: &str, target: &str, relation| CausalEdge {
        source_id: source.to_string(),
        target_id: target.to_string(),
        relation,
        confidence: 0.8,
        evidence: vec![],
    };
    store.add_edge(&edge("o1", "m", CausalRelation::Supports)).unwrap();
    store.add_edge(&edge("o2", "m", CausalRelation::DerivedFrom)).unwrap();
    store.add_edge(&edge("o3", "m", CausalRelation::Contradicts)).unwrap();
    // Associative edges carry no evidence weight.
    store.add_edge(&edge("o4", "m", CausalRelation::Related)).unwrap();

    let metrics = engine().metrics_for(&store, &memory);
    assert_eq!(metrics.supporting_evidence, 2);
    assert_eq!(metrics.contradicting_evidence, 1);
}
