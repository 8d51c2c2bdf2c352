//! Pattern alignment: the convention a memory asserts still matches the
//! currently dominant detected pattern.

use engram_core::memory::BaseMemory;
use engram_core::models::{Dimension, Severity, ValidationIssue};

use crate::context::ValidationContext;

pub fn validate(memory: &BaseMemory, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for pattern in &memory.linked_patterns {
        let status = (ctx.pattern_checker)(pattern);
        if !status.detected {
            issues.push(ValidationIssue {
                dimension: Dimension::PatternAlignment,
                severity: Severity::Moderate,
                description: format!("pattern '{pattern}' is no longer detected"),
                suggestion: Some("archive or rewrite against the current convention".to_string()),
            });
        } else if !status.dominant {
            issues.push(ValidationIssue {
                dimension: Dimension::PatternAlignment,
                severity: Severity::Minor,
                description: format!("pattern '{pattern}' is no longer the dominant convention"),
                suggestion: Some("review against the new dominant pattern".to_string()),
            });
        }
    }

    issues
}
