//! Simulated actuator output
//!
//! Stands in for the physical servo when exercising the motion layer on
//! the host.

use strophe_core::traits::ActuatorOutput;

/// Recording servo output
///
/// Remembers every call so tests can assert on what the controller
/// actually asked the hardware to do.
#[derive(Debug, Clone, Default)]
pub struct SimServo {
    channel: Option<u8>,
    last_command: Option<i16>,
    command_count: u32,
    initialize_count: u32,
}

impl SimServo {
    /// Create an idle simulated output
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the channel the output was initialized with
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// Get the most recently commanded angle
    pub fn last_command(&self) -> Option<i16> {
        self.last_command
    }

    /// Get the number of position commands received
    pub fn command_count(&self) -> u32 {
        self.command_count
    }

    /// Get the number of initialize calls received
    pub fn initialize_count(&self) -> u32 {
        self.initialize_count
    }
}

impl ActuatorOutput for SimServo {
    fn initialize(&mut self, channel: u8) {
        self.channel = Some(channel);
        self.initialize_count += 1;
    }

    fn set_position(&mut self, degrees: i16) {
        self.last_command = Some(degrees);
        self.command_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servo::ServoController;
    use strophe_core::config::SweepConfig;

    #[test]
    fn test_records_initialize_and_commands() {
        let mut sim = SimServo::new();
        sim.initialize(9);
        sim.set_position(45);
        sim.set_position(46);

        assert_eq!(sim.channel(), Some(9));
        assert_eq!(sim.last_command(), Some(46));
        assert_eq!(sim.command_count(), 2);
        assert_eq!(sim.initialize_count(), 1);
    }

    #[test]
    fn test_drives_a_full_sweep_without_hardware() {
        let config = SweepConfig {
            speed_deg_per_s: 200,
            ..Default::default()
        };
        let mut servo = ServoController::new(SimServo::new(), config);
        servo.attach(9);
        servo.write(0);
        servo.update(0);
        servo.rotate(90);

        for now in (0..=450).step_by(10) {
            servo.update(now);
        }

        assert_eq!(servo.position(), Some(90));
        assert!(!servo.is_rotating());
        // write(0) plus one command per 2-degree step (10 ms polls).
        assert_eq!(servo.output().last_command(), Some(90));
        assert_eq!(servo.output().command_count(), 1 + 45);
    }
}
