//! Motion logic
//!
//! Paced, non-blocking rotation toward a commanded target angle.

pub mod sweep;

pub use sweep::{Sweep, SweepState};
