//! Lid actuator drivers

pub mod servo;

pub use servo::{PwmServo, ServoConfig};
