//! Shared fixtures for Engram integration tests: memory builders and an
//! in-memory [`MemoryStore`] with write accounting.

mod store;

pub use store::InMemoryStore;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process. Honors
/// `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

use chrono::{Duration, Utc};
use engram_core::memory::links::FileLink;
use engram_core::memory::types::{
    EpisodeStatus, EpisodicContent, SemanticContent, TribalContent,
};
use engram_core::memory::{BaseMemory, Confidence, Importance, TypedContent};

/// Fluent builder over [`BaseMemory`] for tests.
pub struct MemoryBuilder {
    memory: BaseMemory,
}

impl MemoryBuilder {
    fn from_content(content: TypedContent, summary: &str) -> Self {
        let memory = BaseMemory::new(content, summary).expect("content serializes");
        Self { memory }
    }

    /// A pending episodic memory.
    pub fn episodic(interaction: &str) -> Self {
        Self::from_content(
            TypedContent::Episodic(EpisodicContent {
                interaction: interaction.to_string(),
                context: String::new(),
                outcome: None,
                status: EpisodeStatus::Pending,
            }),
            interaction,
        )
    }

    /// A semantic memory with a topic tag.
    pub fn semantic(knowledge: &str, topic: &str) -> Self {
        let mut builder = Self::from_content(
            TypedContent::Semantic(SemanticContent {
                knowledge: knowledge.to_string(),
                topic: topic.to_string(),
                source_episodes: vec![],
                supporting_evidence: 1,
            }),
            knowledge,
        );
        builder.memory.tags.push(topic.to_string());
        builder
    }

    /// A tribal warning.
    pub fn tribal(knowledge: &str) -> Self {
        Self::from_content(
            TypedContent::Tribal(TribalContent {
                knowledge: knowledge.to_string(),
                severity: "high".to_string(),
                consequences: vec![],
            }),
            knowledge,
        )
    }

    pub fn id(mut self, id: &str) -> Self {
        self.memory.id = id.to_string();
        self
    }

    pub fn confidence(mut self, value: f64) -> Self {
        self.memory.confidence = Confidence::new(value);
        self
    }

    pub fn importance(mut self, importance: Importance) -> Self {
        self.memory.importance = importance;
        self
    }

    /// Backdate creation, update, and access timestamps by `days`.
    pub fn age_days(mut self, days: i64) -> Self {
        let then = Utc::now() - Duration::days(days);
        self.memory.created_at = then;
        self.memory.updated_at = then;
        self.memory.last_accessed = then;
        self
    }

    pub fn access_count(mut self, count: u64) -> Self {
        self.memory.access_count = count;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.memory.tags.push(tag.to_string());
        self
    }

    pub fn file(mut self, path: &str) -> Self {
        self.memory.linked_files.push(FileLink::path(path));
        self
    }

    pub fn function(mut self, name: &str) -> Self {
        self.memory.linked_functions.push(name.to_string());
        self
    }

    pub fn pattern(mut self, name: &str) -> Self {
        self.memory.linked_patterns.push(name.to_string());
        self
    }

    pub fn constraint(mut self, name: &str) -> Self {
        self.memory.linked_constraints.push(name.to_string());
        self
    }

    pub fn archived(mut self) -> Self {
        self.memory.archived = true;
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.memory.summary = summary.to_string();
        self
    }

    pub fn build(self) -> BaseMemory {
        self.memory
    }
}
