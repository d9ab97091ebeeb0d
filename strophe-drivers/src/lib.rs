//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in strophe-core for the rig's rotational actuator:
//!
//! - Servo controller (non-blocking, paced rotation)
//! - PWM servo output (hobby-servo pulse mapping over embedded-hal)
//! - Simulated output for host-side testing

#![no_std]
#![deny(unsafe_code)]

pub mod servo;
