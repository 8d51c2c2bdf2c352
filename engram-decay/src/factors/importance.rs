use engram_core::memory::BaseMemory;

/// Importance anchor factor.
///
/// Critical 2.0, High 1.5, Normal 1.0, Low 0.75 — applied to the half-life,
/// so critical knowledge takes twice as long to fade.
pub fn calculate(memory: &BaseMemory) -> f64 {
    memory.importance.half_life_multiplier()
}
