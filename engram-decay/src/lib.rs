//! # engram-decay
//!
//! Confidence decay & calibration. Recomputes memory confidence from
//! freshness/usage/evidence metrics, exposes validation-feedback boosts,
//! and drives batch decay with archival candidacy.
//!
//! The formula is half-life based and anchored at the last persisted state,
//! so running it twice back-to-back is a no-op (delta below the persistence
//! noise floor).

pub mod archival;
pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::{BoostAction, DecayAssessment, DecayEngine};
