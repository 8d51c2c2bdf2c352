use engram_core::memory::{BaseMemory, Confidence};

/// Default archival threshold.
pub const DEFAULT_ARCHIVAL_THRESHOLD: f64 = Confidence::ARCHIVAL;

/// Check whether a decayed confidence falls below the archival threshold.
pub fn should_archive(decayed_confidence: f64, threshold: f64) -> bool {
    decayed_confidence < threshold
}

/// Archival decision with metadata for audit logging. The decision only
/// marks candidacy — the batch caller triggers the archival write.
#[derive(Debug, Clone)]
pub struct ArchivalDecision {
    pub memory_id: String,
    pub should_archive: bool,
    pub decayed_confidence: f64,
    pub reason: String,
}

/// Evaluate archival eligibility for a memory. Already-archived memories
/// are never re-archived.
pub fn evaluate(memory: &BaseMemory, decayed_confidence: f64, threshold: f64) -> ArchivalDecision {
    if memory.archived {
        return ArchivalDecision {
            memory_id: memory.id.clone(),
            should_archive: false,
            decayed_confidence,
            reason: "already archived".to_string(),
        };
    }

    let archive = should_archive(decayed_confidence, threshold);
    let reason = if archive {
        format!(
            "confidence {:.3} below threshold {:.3} for type {:?}",
            decayed_confidence, threshold, memory.memory_type
        )
    } else {
        "confidence above threshold".to_string()
    };

    ArchivalDecision {
        memory_id: memory.id.clone(),
        should_archive: archive,
        decayed_confidence,
        reason,
    }
}
