use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::importance::Importance;
use super::links::FileLink;
use super::types::MemoryType;

/// Typed content wrapper — each memory type has its own content struct.
/// Serialized as a tagged enum so the type survives round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum TypedContent {
    Episodic(super::types::EpisodicContent),
    Semantic(super::types::SemanticContent),
    Tribal(super::types::TribalContent),
    Procedural(super::types::ProceduralContent),
    PatternRationale(super::types::PatternRationaleContent),
    ConstraintOverride(super::types::ConstraintOverrideContent),
    DecisionContext(super::types::DecisionContextContent),
    CodeSmell(super::types::CodeSmellContent),
}

impl TypedContent {
    /// The memory type this content belongs to.
    pub fn memory_type(&self) -> MemoryType {
        match self {
            Self::Episodic(_) => MemoryType::Episodic,
            Self::Semantic(_) => MemoryType::Semantic,
            Self::Tribal(_) => MemoryType::Tribal,
            Self::Procedural(_) => MemoryType::Procedural,
            Self::PatternRationale(_) => MemoryType::PatternRationale,
            Self::ConstraintOverride(_) => MemoryType::ConstraintOverride,
            Self::DecisionContext(_) => MemoryType::DecisionContext,
            Self::CodeSmell(_) => MemoryType::CodeSmell,
        }
    }

    /// The free-text knowledge carried by this content, used for similarity
    /// grouping, contradiction detection, and summary regeneration.
    pub fn knowledge_text(&self) -> String {
        match self {
            Self::Episodic(c) => format!("{} {}", c.interaction, c.context),
            Self::Semantic(c) => c.knowledge.clone(),
            Self::Tribal(c) => c.knowledge.clone(),
            Self::Procedural(c) => format!("{} {}", c.title, c.steps.join(" ")),
            Self::PatternRationale(c) => format!("{} {}", c.pattern_name, c.rationale),
            Self::ConstraintOverride(c) => c.justification.clone(),
            Self::DecisionContext(c) => format!("{} {}", c.decision, c.rationale),
            Self::CodeSmell(c) => format!("{} {}", c.smell, c.suggestion),
        }
    }
}

/// The universal memory struct. Every record in the store is a BaseMemory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseMemory {
    /// UUID v4 identifier.
    pub id: String,
    /// The type of this memory. Immutable after creation.
    pub memory_type: MemoryType,
    /// Typed content — per-type struct, not a JSON blob.
    pub content: TypedContent,
    /// Short summary used for display and token-budget packing.
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Confidence score, maintained by the decay and validation engines.
    pub confidence: Confidence,
    pub importance: Importance,
    /// Last time this memory was accessed by a query.
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
    /// Last time validation confirmed this memory.
    pub last_validated: Option<DateTime<Utc>>,
    /// Linked files with citation info.
    pub linked_files: Vec<FileLink>,
    pub linked_functions: Vec<String>,
    pub linked_patterns: Vec<String>,
    pub linked_constraints: Vec<String>,
    /// Free-form tags; the first tag doubles as the memory's topic.
    pub tags: Vec<String>,
    /// Archived memories are excluded from active search by default.
    pub archived: bool,
    pub supersedes: Option<String>,
    pub superseded_by: Option<String>,
    /// blake3 hash of the serialized content, for dedup and provenance.
    pub content_hash: String,
}

impl BaseMemory {
    /// Build a new memory from typed content with fresh timestamps.
    pub fn new(content: TypedContent, summary: impl Into<String>) -> crate::EngramResult<Self> {
        let now = Utc::now();
        let content_hash = Self::compute_content_hash(&content)?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            memory_type: content.memory_type(),
            content,
            summary: summary.into(),
            created_at: now,
            updated_at: now,
            confidence: Confidence::default(),
            importance: Importance::Normal,
            last_accessed: now,
            access_count: 0,
            last_validated: None,
            linked_files: vec![],
            linked_functions: vec![],
            linked_patterns: vec![],
            linked_constraints: vec![],
            tags: vec![],
            archived: false,
            supersedes: None,
            superseded_by: None,
            content_hash,
        })
    }

    /// Compute the blake3 content hash from the serialized content.
    pub fn compute_content_hash(content: &TypedContent) -> crate::EngramResult<String> {
        let serialized = serde_json::to_string(content)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    /// The memory's topic: its first tag, if any.
    pub fn topic(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Whether this memory carries any linked entities at all.
    pub fn has_linked_entities(&self) -> bool {
        !self.linked_files.is_empty()
            || !self.linked_functions.is_empty()
            || !self.linked_patterns.is_empty()
            || !self.linked_constraints.is_empty()
    }

    /// Structural comparison: same content hash, type, summary, confidence,
    /// importance, and tags. Distinct from `PartialEq`, which compares IDs.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.content_hash == other.content_hash
            && self.memory_type == other.memory_type
            && self.summary == other.summary
            && self.confidence == other.confidence
            && self.importance == other.importance
            && self.tags == other.tags
    }
}

/// Identity equality: two memories are equal if they have the same ID.
impl PartialEq for BaseMemory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
