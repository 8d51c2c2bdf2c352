//! The four validators. Each returns a list of issues; an empty list means
//! the dimension is clean. Validators never mutate the memory.

pub mod citation;
pub mod contradiction;
pub mod pattern_alignment;
pub mod temporal;
