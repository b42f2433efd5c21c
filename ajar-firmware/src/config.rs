//! Compile-time bin configuration
//!
//! Edit and rebuild to match the mechanical build. Validated once at
//! boot, before anything moves.

use ajar_core::config::{BinConfig, DwellPolicy};

/// The embedded configuration
pub const BIN_CONFIG: BinConfig = BinConfig {
    detect_threshold_cm: 30,
    open_angle_deg: 90,
    closed_angle_deg: 0,
    open_dwell_ms: 3000,
    poll_interval_ms: 100,
    echo_timeout_us: 30_000,
    dwell_policy: DwellPolicy::Fixed,
};
