//! Motion configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default rotation rate in degrees per second
///
/// The bench servo covers a full turn in 1.5 seconds.
pub const DEFAULT_SPEED_DEG_PER_S: u32 = 240;

/// Sweep motion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepConfig {
    /// Rotation rate in degrees per second
    ///
    /// Numerically this is also millidegrees per millisecond, the unit
    /// the sweep budget accumulates in.
    pub speed_deg_per_s: u32,
    /// Minimum reachable angle in degrees
    pub min_deg: i16,
    /// Maximum reachable angle in degrees
    pub max_deg: i16,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            speed_deg_per_s: DEFAULT_SPEED_DEG_PER_S,
            min_deg: 0,
            max_deg: 180,
        }
    }
}

impl SweepConfig {
    /// Check if an angle is within the configured travel
    pub fn is_in_travel(&self, degrees: i16) -> bool {
        degrees >= self.min_deg && degrees <= self.max_deg
    }

    /// Clamp an angle to the configured travel
    pub fn clamp(&self, degrees: i16) -> i16 {
        degrees.clamp(self.min_deg, self.max_deg)
    }
}
