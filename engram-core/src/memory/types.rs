use serde::{Deserialize, Serialize};

/// The 8 memory types. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    /// Raw interaction records — consolidation's input.
    Episodic,
    /// Generalized knowledge distilled from episodes.
    Semantic,
    /// Institutional warnings and hard-won lessons.
    Tribal,
    /// How-to procedures.
    Procedural,
    /// Why a code pattern exists.
    PatternRationale,
    /// Why a constraint was overridden.
    ConstraintOverride,
    /// Context around a past decision.
    DecisionContext,
    /// A known code smell and what to do about it.
    CodeSmell,
}

impl MemoryType {
    /// All variants for iteration.
    pub const ALL: [MemoryType; 8] = [
        Self::Episodic,
        Self::Semantic,
        Self::Tribal,
        Self::Procedural,
        Self::PatternRationale,
        Self::ConstraintOverride,
        Self::DecisionContext,
        Self::CodeSmell,
    ];
}

/// Consolidation lifecycle of an episodic memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    /// Not yet consolidated — eligible for replay.
    #[default]
    Pending,
    /// Abstracted into a semantic memory and archived.
    Consolidated,
}

/// One past interaction/event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodicContent {
    pub interaction: String,
    pub context: String,
    pub outcome: Option<String>,
    #[serde(default)]
    pub status: EpisodeStatus,
}

/// Durable generalized knowledge derived from episodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticContent {
    pub knowledge: String,
    pub topic: String,
    /// IDs of the episodes this knowledge was abstracted from.
    pub source_episodes: Vec<String>,
    /// Number of independent observations backing this knowledge.
    pub supporting_evidence: u32,
}

/// Institutional knowledge: "don't touch the billing cron on Fridays".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TribalContent {
    pub knowledge: String,
    pub severity: String,
    pub consequences: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProceduralContent {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternRationaleContent {
    pub pattern_name: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstraintOverrideContent {
    pub constraint_id: String,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionContextContent {
    pub decision: String,
    pub rationale: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeSmellContent {
    pub smell: String,
    pub location: String,
    pub suggestion: String,
}
