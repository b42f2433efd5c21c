//! Configuration type definitions

/// Maximum servo travel in degrees
pub const MAX_ANGLE_DEG: u8 = 180;

/// Dwell timer policy while the lid is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DwellPolicy {
    /// Close on schedule once the dwell elapses, even if an object is
    /// still in range
    #[default]
    Fixed,
    /// Restart the dwell window on every in-range sample while open
    ExtendOnPresence,
}

/// Errors that can occur validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Detection threshold is zero; nothing could ever open the lid
    ZeroThreshold,
    /// Open dwell is zero; the lid would close on the tick after opening
    ZeroDwell,
    /// Poll interval is zero
    ZeroPollInterval,
    /// Echo timeout is zero; every measurement would report no echo
    ZeroEchoTimeout,
    /// An angle exceeds the servo travel limit
    AngleOutOfRange,
    /// Open and closed angles are equal
    OpenEqualsClosed,
}

/// Bin configuration
///
/// Immutable for the process lifetime. Defaults mirror the reference
/// hardware build: HC-SR04 at 30 cm, 90°/0° servo travel, 3 s dwell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BinConfig {
    /// Detection threshold (cm); samples at or below this open the lid
    pub detect_threshold_cm: u16,
    /// Servo angle for the open position (degrees)
    pub open_angle_deg: u8,
    /// Servo angle for the closed position (degrees)
    pub closed_angle_deg: u8,
    /// How long the lid stays open after opening (ms)
    pub open_dwell_ms: u32,
    /// Inter-tick delay of the polling loop (ms)
    pub poll_interval_ms: u32,
    /// Max wait for an echo pulse before declaring no object (µs)
    pub echo_timeout_us: u32,
    /// Dwell timer policy while open
    pub dwell_policy: DwellPolicy,
}

impl Default for BinConfig {
    fn default() -> Self {
        Self {
            detect_threshold_cm: 30,
            open_angle_deg: 90,
            closed_angle_deg: 0,
            open_dwell_ms: 3000,
            poll_interval_ms: 100,
            echo_timeout_us: 30_000,
            dwell_policy: DwellPolicy::Fixed,
        }
    }
}

impl BinConfig {
    /// Check the configuration for values that cannot work
    ///
    /// Meant to run once at boot, before any hardware moves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.detect_threshold_cm == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.open_dwell_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.echo_timeout_us == 0 {
            return Err(ConfigError::ZeroEchoTimeout);
        }
        if self.open_angle_deg > MAX_ANGLE_DEG || self.closed_angle_deg > MAX_ANGLE_DEG {
            return Err(ConfigError::AngleOutOfRange);
        }
        if self.open_angle_deg == self.closed_angle_deg {
            return Err(ConfigError::OpenEqualsClosed);
        }
        Ok(())
    }
}
