//! Temporal validation: age and staleness against type-specific half-lives.
//!
//! The clock starts at creation or the last successful validation, whichever
//! is later — revalidation resets temporal staleness.

use chrono::{DateTime, Utc};
use engram_core::memory::{half_life_days, BaseMemory};
use engram_core::models::{Dimension, Severity, ValidationIssue};

pub fn validate(memory: &BaseMemory, now: DateTime<Utc>) -> Vec<ValidationIssue> {
    let half_life = half_life_days(memory.memory_type) as f64;
    let anchor = memory.last_validated.unwrap_or(memory.created_at);
    let age_days = (now - anchor).num_seconds().max(0) as f64 / 86_400.0;
    let days_since_access = (now - memory.last_accessed).num_seconds().max(0) as f64 / 86_400.0;

    let ratio = age_days / half_life;
    if ratio <= 1.0 {
        return vec![];
    }

    let severity = if ratio > 4.0 && days_since_access > half_life {
        // Long past its half-life and nobody is reading it.
        Severity::Severe
    } else if ratio > 2.0 {
        Severity::Moderate
    } else {
        Severity::Minor
    };

    vec![ValidationIssue {
        dimension: Dimension::Temporal,
        severity,
        description: format!(
            "{:.0} days old against a {:.0}-day half-life",
            age_days, half_life
        ),
        suggestion: Some("revalidate or archive".to_string()),
    }]
}
