//! Default values for all subsystem configs.
//!
//! The consolidation thresholds (merge 0.5, 5-episode minimum, 7-day age,
//! 100-item cap) have no documented calibration rationale; they stay
//! configurable rather than hard-coded.

// Consolidation
pub const MAX_BATCH_SIZE: usize = 100;
pub const MIN_BATCH_SIZE: usize = 5;
pub const MIN_AGE_DAYS: i64 = 7;
pub const MERGE_THRESHOLD: f64 = 0.5;
pub const GROUPING_THRESHOLD: f64 = 0.3;
pub const FREQUENT_ACCESS_THRESHOLD: u64 = 5;

// Decay
pub const ARCHIVAL_THRESHOLD: f64 = 0.1;
pub const PERSISTENCE_EPSILON: f64 = 0.01;
pub const VALIDATION_TRIGGER: f64 = 0.3;

// Causal inference
pub const FILE_WEIGHT: f64 = 0.35;
pub const FUNCTION_WEIGHT: f64 = 0.30;
pub const PATTERN_WEIGHT: f64 = 0.20;
pub const CONSTRAINT_WEIGHT: f64 = 0.15;
pub const MIN_EDGE_SCORE: f64 = 0.2;

// Validation
pub const STALE_AFTER_DAYS: i64 = 30;
pub const RECENT_WITHIN_DAYS: i64 = 7;
pub const MINOR_PENALTY: f64 = 0.9;
pub const MODERATE_PENALTY: f64 = 0.7;
pub const SEVERE_CAP: f64 = 0.3;
