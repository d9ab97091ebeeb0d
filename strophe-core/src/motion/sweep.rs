//! Sweep state machine for paced rotation
//!
//! Tracks a commanded target angle and advances the believed position
//! toward it at a fixed angular rate, one poll at a time. All arithmetic
//! is integer-only: the rate is carried in degrees per second, which is
//! numerically millidegrees per millisecond, so elapsed milliseconds
//! credit a millidegree budget directly.

use crate::config::SweepConfig;

/// Millidegrees per degree
const MDEG_PER_DEG: u32 = 1_000;

/// Current sweep state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepState {
    /// No position reference established yet
    Unreferenced,
    /// At the commanded target (or nothing commanded)
    Idle,
    /// Moving toward the commanded target
    Sweeping,
}

/// Paced rotation state machine
///
/// The surrounding controller feeds this elapsed wall-clock time on every
/// poll. The sweep credits a motion budget from that time, spends whole
/// degrees from the budget toward the target, and keeps the sub-degree
/// remainder, so rates below one degree per poll lose no time across
/// polls. It never overshoots: arrival at the target discards whatever
/// budget is left.
#[derive(Debug, Clone)]
pub struct Sweep {
    config: SweepConfig,
    /// Believed position, None until the first command establishes one
    current_deg: Option<i16>,
    /// Commanded destination, clamped to travel
    target_deg: Option<i16>,
    /// Accumulated unspent motion budget in millidegrees
    budget_mdeg: u32,
}

impl Sweep {
    /// Create a new sweep with the given motion configuration
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            current_deg: None,
            target_deg: None,
            budget_mdeg: 0,
        }
    }

    /// Get the motion configuration
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Record a new destination without moving
    ///
    /// Out-of-travel values clamp to the nearest bound. The believed
    /// position is untouched; motion resumes from wherever it was on the
    /// next [`advance`](Sweep::advance). Returns the clamped target.
    pub fn set_target(&mut self, degrees: i16) -> i16 {
        let clamped = self.config.clamp(degrees);
        self.target_deg = Some(clamped);
        clamped
    }

    /// Unpaced jump to an angle
    ///
    /// Establishes the position reference and cancels any pending sweep.
    /// Returns the clamped angle for the caller to command directly.
    pub fn jump_to(&mut self, degrees: i16) -> i16 {
        let clamped = self.config.clamp(degrees);
        self.current_deg = Some(clamped);
        self.target_deg = Some(clamped);
        self.budget_mdeg = 0;
        clamped
    }

    /// Advance the sweep by elapsed wall-clock time
    ///
    /// Credits the budget with `elapsed_ms` worth of rotation, spends the
    /// whole degrees it covers toward the target (catching up over long
    /// poll gaps in one call), and clamps at the target. Returns the new
    /// position when it changed, so the caller can command the output.
    ///
    /// Time spent at the target earns no budget: a later retarget paces
    /// from zero. A pending target with no position reference is realized
    /// as a jump, since there is nothing to pace from.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<i16> {
        let target = self.target_deg?;

        let current = match self.current_deg {
            Some(deg) => deg,
            None => {
                self.current_deg = Some(target);
                self.budget_mdeg = 0;
                return Some(target);
            }
        };

        if current == target {
            self.budget_mdeg = 0;
            return None;
        }

        self.budget_mdeg = self
            .budget_mdeg
            .saturating_add(elapsed_ms.saturating_mul(self.config.speed_deg_per_s));

        let covered = (self.budget_mdeg / MDEG_PER_DEG) as i32;
        if covered == 0 {
            return None;
        }

        let distance = (target as i32 - current as i32).abs();
        let step = covered.min(distance);

        if step == distance {
            // Arrived: leftover budget must not leak into a later sweep.
            self.budget_mdeg = 0;
            self.current_deg = Some(target);
            return Some(target);
        }

        self.budget_mdeg -= step as u32 * MDEG_PER_DEG;
        let next = if target > current {
            (current as i32 + step) as i16
        } else {
            (current as i32 - step) as i16
        };
        self.current_deg = Some(next);
        Some(next)
    }

    /// Get the believed position, if a reference has been established
    pub fn position(&self) -> Option<i16> {
        self.current_deg
    }

    /// Get the commanded target, if any
    pub fn target(&self) -> Option<i16> {
        self.target_deg
    }

    /// Get the current sweep state
    pub fn state(&self) -> SweepState {
        match (self.current_deg, self.target_deg) {
            (None, None) => SweepState::Unreferenced,
            (None, Some(_)) => SweepState::Sweeping,
            (Some(current), Some(target)) if current != target => SweepState::Sweeping,
            (Some(_), _) => SweepState::Idle,
        }
    }

    /// Check whether the sweep is still moving toward its target
    pub fn is_sweeping(&self) -> bool {
        self.state() == SweepState::Sweeping
    }
}
