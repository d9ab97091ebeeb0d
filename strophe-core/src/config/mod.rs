//! Configuration types
//!
//! Board-agnostic configuration structures for the servo channel and
//! its motion profile.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
