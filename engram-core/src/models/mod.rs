pub mod consolidation;
pub mod decay;
pub mod validation;

pub use consolidation::{AbstractedKnowledge, ConsolidationReport};
pub use decay::{DecayResult, UsageMetrics};
pub use validation::{
    Dimension, MemoryValidation, Severity, ValidationIssue, ValidationOutcome, ValidationReport,
    ValidationScope,
};
