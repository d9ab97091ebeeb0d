//! Run-time safety monitoring

pub mod monitor;

pub use monitor::{RunMonitor, RunStatus, DEFAULT_MAX_RUN_TIME_S};
