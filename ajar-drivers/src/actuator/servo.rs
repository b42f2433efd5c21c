//! PWM hobby servo driver
//!
//! Positions a standard 50 Hz hobby servo by pulse width: `min_pulse_us`
//! at 0° up to `max_pulse_us` at full travel, mapped linearly. The
//! defaults suit the SG90/MG996R class of lid servos.

use ajar_core::traits::LidActuator;
use embedded_hal::pwm::SetDutyCycle;

/// Servo pulse configuration
#[derive(Debug, Clone)]
pub struct ServoConfig {
    /// Pulse width at 0 degrees (µs)
    pub min_pulse_us: u16,
    /// Pulse width at `max_angle_deg` (µs)
    pub max_pulse_us: u16,
    /// PWM frame period (µs); 20 000 is the standard 50 Hz frame
    pub period_us: u16,
    /// Mechanical travel limit (degrees)
    pub max_angle_deg: u8,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 500,
            max_pulse_us: 2400,
            period_us: 20_000,
            max_angle_deg: 180,
        }
    }
}

/// Hobby servo on one PWM channel
pub struct PwmServo<P> {
    pwm: P,
    config: ServoConfig,
    angle_deg: u8,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Create a new servo driver; does not move the servo until the
    /// first `set_angle`
    pub fn new(pwm: P, config: ServoConfig) -> Self {
        Self {
            pwm,
            config,
            angle_deg: 0,
        }
    }

    /// Last commanded angle in degrees
    pub fn angle_deg(&self) -> u8 {
        self.angle_deg
    }

    /// Get access to the underlying PWM channel
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    fn pulse_us_for(&self, angle_deg: u8) -> u16 {
        let span = u32::from(self.config.max_pulse_us - self.config.min_pulse_us);
        let pulse = u32::from(angle_deg) * span / u32::from(self.config.max_angle_deg)
            + u32::from(self.config.min_pulse_us);
        pulse as u16
    }
}

impl<P: SetDutyCycle> LidActuator for PwmServo<P> {
    fn set_angle(&mut self, angle_deg: u8) {
        let clamped = angle_deg.min(self.config.max_angle_deg);
        let pulse_us = self.pulse_us_for(clamped);

        // Fire-and-forget: the lid loop never reads servo state back
        let _ = self
            .pwm
            .set_duty_cycle_fraction(pulse_us, self.config.period_us);
        self.angle_deg = clamped;
    }
}
