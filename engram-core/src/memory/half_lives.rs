use super::types::MemoryType;

/// Expected half-life in days for each memory type.
///
/// Drives temporal decay and the temporal validation dimension. Episodic
/// memories are short-lived by design — consolidation is expected to lift
/// anything durable out of them before they fade.
pub fn half_life_days(memory_type: MemoryType) -> u64 {
    match memory_type {
        MemoryType::Episodic => 30,
        MemoryType::Semantic => 90,
        MemoryType::Tribal => 365,
        MemoryType::Procedural => 180,
        MemoryType::PatternRationale => 120,
        MemoryType::ConstraintOverride => 60,
        MemoryType::DecisionContext => 180,
        MemoryType::CodeSmell => 90,
    }
}
