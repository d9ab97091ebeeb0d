//! Servo actuation
//!
//! This module provides the non-blocking servo controller and the
//! actuator outputs it drives:
//!
//! - [`ServoController`]: paced rotation over any [`ActuatorOutput`]
//! - [`PwmServo`]: hobby-servo pulse mapping over an embedded-hal PWM channel
//! - [`SimServo`]: recording output for host-side tests
//!
//! [`ActuatorOutput`]: strophe_core::traits::ActuatorOutput

pub mod controller;
pub mod pwm;
pub mod sim;

pub use controller::ServoController;
pub use pwm::PwmServo;
pub use sim::SimServo;
