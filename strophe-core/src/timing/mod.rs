//! Poll cadence helpers
//!
//! Timekeeping for cooperative loops that must never block.

pub mod cadence;

pub use cadence::Cadence;
