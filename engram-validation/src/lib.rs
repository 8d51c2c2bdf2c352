//! # engram-validation
//!
//! 4-dimension memory validation with severity classification and automatic
//! healing.
//!
//! ## Dimensions
//! 1. **Citation** — linked files still exist and their cited content stands
//! 2. **Temporal** — age vs type-specific half-life expectations
//! 3. **Contradiction** — conflicting knowledge on the same topic/entities
//! 4. **Pattern alignment** — asserted convention still matches the dominant
//!    detected pattern
//!
//! Severity is the max over all issues. Minor issues heal automatically when
//! requested; moderate issues decay confidence; severe issues flag the
//! memory for human review.

pub mod context;
pub mod dimensions;
pub mod engine;
pub mod healing;

pub use context::{FileInfo, PatternStatus, ValidationContext};
pub use engine::ValidationEngine;
