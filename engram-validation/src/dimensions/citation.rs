//! Citation validation: linked files still exist and their cited content
//! stands. Also covers record hygiene — a memory with no summary cannot be
//! packed into a context window and is flagged as healable.

use engram_core::memory::BaseMemory;
use engram_core::models::{Dimension, Severity, ValidationIssue};

use crate::context::ValidationContext;

pub fn validate(memory: &BaseMemory, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if memory.summary.trim().is_empty() {
        issues.push(ValidationIssue {
            dimension: Dimension::Citation,
            severity: Severity::Minor,
            description: "summary is empty".to_string(),
            suggestion: Some("regenerate summary from content".to_string()),
        });
    }

    for link in &memory.linked_files {
        match (ctx.file_checker)(&link.file_path) {
            Some(info) => {
                if let (Some(expected), Some(actual)) = (&link.content_hash, &info.content_hash) {
                    if expected != actual {
                        issues.push(ValidationIssue {
                            dimension: Dimension::Citation,
                            severity: Severity::Minor,
                            description: format!(
                                "content drift in {}: cited hash no longer matches",
                                link.file_path
                            ),
                            suggestion: Some("refresh citation hash".to_string()),
                        });
                    }
                }
                if let (Some(line), Some(total)) = (link.line_start, info.total_lines) {
                    if line > total {
                        issues.push(ValidationIssue {
                            dimension: Dimension::Citation,
                            severity: Severity::Minor,
                            description: format!(
                                "line {} past end of {} ({} lines)",
                                line, link.file_path, total
                            ),
                            suggestion: Some("drop stale line reference".to_string()),
                        });
                    }
                }
            }
            None => {
                if let Some(new_path) = (ctx.rename_detector)(&link.file_path) {
                    issues.push(ValidationIssue {
                        dimension: Dimension::Citation,
                        severity: Severity::Minor,
                        description: format!("file renamed: {} -> {}", link.file_path, new_path),
                        suggestion: Some(format!("update citation to {new_path}")),
                    });
                } else {
                    issues.push(ValidationIssue {
                        dimension: Dimension::Citation,
                        severity: Severity::Moderate,
                        description: format!("cited file no longer exists: {}", link.file_path),
                        suggestion: None,
                    });
                }
            }
        }
    }

    issues
}
