//! Individual calibration factors. Each scales the memory's effective
//! half-life; none touches confidence directly.

pub mod evidence;
pub mod importance;
pub mod usage;
