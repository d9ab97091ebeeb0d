//! PWM servo output
//!
//! Maps angles to hobby-servo pulse widths over an embedded-hal PWM
//! channel: a 50 Hz frame with 500 µs at the low end of travel and
//! 2500 µs at the high end, linear in between. The frame timing and
//! pulse endpoints come from [`ServoHwConfig`].

use embedded_hal::pwm::SetDutyCycle;
use strophe_core::config::ServoHwConfig;
use strophe_core::traits::ActuatorOutput;

/// Hobby-servo output over a PWM channel
///
/// The PWM channel is already bound to its pin by the HAL, so
/// `initialize` only arms the output; no pulse is produced until the
/// first position command. Angles outside the configured travel clamp
/// to the pulse endpoints.
pub struct PwmServo<P> {
    pwm: P,
    config: ServoHwConfig,
    armed: bool,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Create a servo output over a PWM channel
    pub fn new(pwm: P, config: ServoHwConfig) -> Self {
        Self {
            pwm,
            config,
            armed: false,
        }
    }

    /// Get the hardware configuration
    pub fn config(&self) -> &ServoHwConfig {
        &self.config
    }

    /// Pulse width for an angle, in microseconds
    fn pulse_us(&self, degrees: i16) -> u32 {
        let travel = self.config.travel_deg.max(1);
        let degrees = degrees.clamp(0, travel) as u32;
        let span_us = self.config.max_pulse_us.saturating_sub(self.config.min_pulse_us) as u32;
        self.config.min_pulse_us as u32 + degrees * span_us / travel as u32
    }

    /// Duty cycle for an angle, scaled to the channel's resolution
    fn duty_for(&self, degrees: i16) -> u16 {
        let max_duty = self.pwm.max_duty_cycle() as u32;
        let duty = self.pulse_us(degrees) * max_duty / self.config.period_us();
        duty.min(max_duty) as u16
    }
}

impl<P: SetDutyCycle> ActuatorOutput for PwmServo<P> {
    fn initialize(&mut self, _channel: u8) {
        // The channel id is rig metadata; the pin binding lives in the
        // PWM peripheral handed to `new`.
        self.armed = true;
    }

    fn set_position(&mut self, degrees: i16) {
        if !self.armed {
            return;
        }

        // A rejected duty write has no recovery path at this layer.
        let duty = self.duty_for(degrees);
        let _ = self.pwm.set_duty_cycle(duty);
    }
}
