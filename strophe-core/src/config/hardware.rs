//! Hardware configuration types
//!
//! These types describe the servo output channel at the hardware level:
//! PWM frame timing and the pulse widths spanning the mechanical travel.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Servo channel hardware configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoHwConfig {
    /// Servo name (e.g., "valve")
    pub name: String<MAX_LABEL_LEN>,
    /// PWM-capable output channel on the rig controller
    pub channel: u8,
    /// PWM frame frequency in Hz
    pub pwm_freq_hz: u16,
    /// Pulse width at the low end of travel (µs)
    pub min_pulse_us: u16,
    /// Pulse width at the high end of travel (µs)
    pub max_pulse_us: u16,
    /// Mechanical travel spanned by the pulse range, in degrees
    pub travel_deg: i16,
}

impl Default for ServoHwConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            channel: 9,
            pwm_freq_hz: 50,
            min_pulse_us: 500,
            max_pulse_us: 2500,
            travel_deg: 180,
        }
    }
}

impl ServoHwConfig {
    /// PWM frame period in microseconds
    pub fn period_us(&self) -> u32 {
        1_000_000 / self.pwm_freq_hz.max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hobby_servo() {
        let config = ServoHwConfig::default();

        assert_eq!(config.pwm_freq_hz, 50);
        assert_eq!(config.period_us(), 20_000);
        assert!(config.min_pulse_us < config.max_pulse_us);
        assert_eq!(config.travel_deg, 180);
    }

    #[test]
    fn test_period_zero_freq_does_not_divide_by_zero() {
        let config = ServoHwConfig {
            pwm_freq_hz: 0,
            ..Default::default()
        };

        assert_eq!(config.period_us(), 1_000_000);
    }
}
