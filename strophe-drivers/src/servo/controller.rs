//! Non-blocking servo controller
//!
//! Owns an actuator output and advances it toward a commanded angle in
//! short, paced steps driven by the control loop's poll. Nothing here
//! blocks or sleeps: the loop supplies a monotonic millisecond counter
//! and the controller decides how much rotation that time has earned.
//!
//! # Usage
//!
//! ```ignore
//! let mut servo = ServoController::new(output, SweepConfig::default());
//! servo.attach(hw.channel);
//! servo.write(0);
//! servo.rotate(90);
//!
//! // In the control loop, every iteration:
//! servo.update(millis());
//! if !servo.is_rotating() {
//!     // target reached
//! }
//! ```

use strophe_core::config::SweepConfig;
use strophe_core::motion::Sweep;
use strophe_core::traits::ActuatorOutput;

/// Non-blocking rotational actuator controller
///
/// All entry points return immediately. Motion happens only through
/// repeated [`update`](ServoController::update) polls, which command the
/// output at most once each and only when the position actually
/// advanced. Before [`attach`](ServoController::attach), every command
/// is a safe no-op.
pub struct ServoController<O> {
    output: O,
    sweep: Sweep,
    /// Bound output channel, None until attach
    channel: Option<u8>,
    /// Counter value at the previous poll, None until the first update
    last_poll_ms: Option<u32>,
}

impl<O: ActuatorOutput> ServoController<O> {
    /// Create a controller over an actuator output
    pub fn new(output: O, config: SweepConfig) -> Self {
        Self {
            output,
            sweep: Sweep::new(config),
            channel: None,
            last_poll_ms: None,
        }
    }

    /// Bind the controller to a physical output channel
    ///
    /// The first call initializes the output; it does not move the
    /// actuator. Calling again with the same channel is a no-op, and a
    /// different channel is ignored: the first binding wins.
    pub fn attach(&mut self, channel: u8) {
        if self.channel.is_none() {
            self.output.initialize(channel);
            self.channel = Some(channel);
        }
    }

    /// Command a new target angle
    ///
    /// Records the destination and returns immediately; rotation is
    /// realized through subsequent [`update`](ServoController::update)
    /// polls. Out-of-travel targets clamp to the nearest bound. A new
    /// target abandons any in-flight motion in favor of the new
    /// direction on the next poll. Ignored while unattached.
    pub fn rotate(&mut self, target_deg: i16) {
        if self.channel.is_some() {
            self.sweep.set_target(target_deg);
        }
    }

    /// Command the output to an angle immediately, without pacing
    ///
    /// For initialization and deliberate jumps. Ignored while unattached.
    pub fn write(&mut self, degrees: i16) {
        if self.channel.is_some() {
            let applied = self.sweep.jump_to(degrees);
            self.output.set_position(applied);
        }
    }

    /// Poll entry point, called on every control-loop iteration
    ///
    /// `now_ms` is a monotonic millisecond counter; wraparound is handled
    /// by wrapping subtraction, so a counter rollover never produces an
    /// absurd elapsed time. The poll timestamp advances on every call,
    /// which keeps idle stretches from turning into a catch-up jump when
    /// a target finally arrives. O(1), never blocks. Ignored while
    /// unattached.
    pub fn update(&mut self, now_ms: u32) {
        if self.channel.is_none() {
            return;
        }

        let elapsed_ms = match self.last_poll_ms {
            Some(previous) => now_ms.wrapping_sub(previous),
            // The first poll only establishes the time reference.
            None => 0,
        };
        self.last_poll_ms = Some(now_ms);

        if let Some(degrees) = self.sweep.advance(elapsed_ms) {
            self.output.set_position(degrees);
        }
    }

    /// Check whether a commanded rotation is still in progress
    pub fn is_rotating(&self) -> bool {
        self.sweep.is_sweeping()
    }

    /// Get the believed position, if one has been established
    pub fn position(&self) -> Option<i16> {
        self.sweep.position()
    }

    /// Get the commanded target, if any
    pub fn target(&self) -> Option<i16> {
        self.sweep.target()
    }

    /// Get the bound output channel, if attached
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// Get access to the underlying output
    pub fn output(&self) -> &O {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servo::SimServo;

    /// 0.2 degrees per millisecond
    const SLOW: u32 = 200;

    fn attached_at_zero(speed_deg_per_s: u32) -> ServoController<SimServo> {
        let config = SweepConfig {
            speed_deg_per_s,
            ..Default::default()
        };
        let mut servo = ServoController::new(SimServo::new(), config);
        servo.attach(9);
        servo.write(0);
        servo
    }

    #[test]
    fn test_attach_initializes_without_moving() {
        let mut servo = ServoController::new(SimServo::new(), SweepConfig::default());
        servo.attach(9);

        assert_eq!(servo.channel(), Some(9));
        assert_eq!(servo.output.channel(), Some(9));
        assert_eq!(servo.output.command_count(), 0);
    }

    #[test]
    fn test_attach_first_binding_wins() {
        let mut servo = ServoController::new(SimServo::new(), SweepConfig::default());
        servo.attach(9);
        servo.attach(9);
        servo.attach(7);

        assert_eq!(servo.channel(), Some(9));
        assert_eq!(servo.output.initialize_count(), 1);
    }

    #[test]
    fn test_unattached_commands_are_noops() {
        let mut servo = ServoController::new(SimServo::new(), SweepConfig::default());
        servo.rotate(90);
        servo.write(45);
        servo.update(1_000);

        assert_eq!(servo.position(), None);
        assert_eq!(servo.output.command_count(), 0);
        assert!(!servo.is_rotating());
    }

    #[test]
    fn test_write_commands_immediately() {
        let mut servo = attached_at_zero(SLOW);
        servo.write(135);

        assert_eq!(servo.output.last_command(), Some(135));
        assert_eq!(servo.position(), Some(135));
        assert!(!servo.is_rotating());
    }

    #[test]
    fn test_rotate_alone_moves_nothing() {
        let mut servo = attached_at_zero(SLOW);
        let commands = servo.output.command_count();
        servo.rotate(90);

        assert!(servo.is_rotating());
        assert_eq!(servo.output.command_count(), commands);
        assert_eq!(servo.position(), Some(0));
    }

    #[test]
    fn test_paced_rotation_reaches_target() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(0);
        servo.rotate(90);

        // Poll every 5 ms: one degree per poll at 0.2 deg/ms.
        let mut now = 0;
        while servo.is_rotating() {
            now += 5;
            servo.update(now);
            assert!(now <= 450, "sweep should finish within 450 ms");
        }

        assert_eq!(now, 450);
        assert_eq!(servo.position(), Some(90));
        assert_eq!(servo.output.last_command(), Some(90));
    }

    #[test]
    fn test_fast_polling_earns_no_free_steps() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(0);
        servo.rotate(90);

        // 4 ms of real time across many polls is still under one degree.
        servo.update(1);
        servo.update(2);
        servo.update(3);
        servo.update(4);
        assert_eq!(servo.position(), Some(0));

        servo.update(5);
        assert_eq!(servo.position(), Some(1));
    }

    #[test]
    fn test_poll_gap_catches_up() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(1_000);
        servo.rotate(180);

        servo.update(1_100);
        assert_eq!(servo.position(), Some(20));
        assert!(servo.is_rotating());
    }

    #[test]
    fn test_exact_boundary_arrival() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(0);
        servo.rotate(90);
        servo.update(450);

        assert_eq!(servo.position(), Some(90));
        assert!(!servo.is_rotating());
    }

    #[test]
    fn test_repolling_same_instant_is_idempotent() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(0);
        servo.rotate(90);
        servo.update(25);
        let position = servo.position();

        servo.update(25);
        servo.update(25);
        assert_eq!(servo.position(), position);
    }

    #[test]
    fn test_idle_polls_send_no_commands() {
        let mut servo = attached_at_zero(SLOW);
        let commands = servo.output.command_count();

        for now in 0..50 {
            servo.update(now * 10);
        }
        assert_eq!(servo.output.command_count(), commands);
    }

    #[test]
    fn test_counter_wraparound_is_safe() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(u32::MAX - 100);
        servo.rotate(90);

        // 450 ms elapse across the counter rollover.
        servo.update(349);
        assert_eq!(servo.position(), Some(90));
        assert!(!servo.is_rotating());
    }

    #[test]
    fn test_retarget_reverses_in_flight_motion() {
        let mut servo = attached_at_zero(SLOW);
        servo.update(0);
        servo.rotate(180);
        servo.update(100);
        assert_eq!(servo.position(), Some(20));

        servo.rotate(0);
        servo.update(150);
        assert_eq!(servo.position(), Some(10));
    }

    #[test]
    fn test_out_of_travel_target_clamps() {
        let mut servo = attached_at_zero(1_000);
        servo.update(0);
        servo.rotate(400);

        assert_eq!(servo.target(), Some(180));
        servo.update(60_000);
        assert_eq!(servo.position(), Some(180));
    }

    #[test]
    fn test_split_polls_match_single_poll() {
        let mut split = attached_at_zero(SLOW);
        let mut single = attached_at_zero(SLOW);
        split.update(0);
        single.update(0);
        split.rotate(90);
        single.rotate(90);

        split.update(100);
        split.update(233);
        single.update(233);

        assert_eq!(split.position(), single.position());
    }
}
