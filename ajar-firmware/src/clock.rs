//! Monotonic clock over the embassy time driver

use ajar_core::traits::Monotonic;
use embassy_time::Instant;

/// Microsecond uptime counter backed by the RP2040 timer peripheral
pub struct UptimeClock;

impl Monotonic for UptimeClock {
    fn now_us(&mut self) -> u64 {
        Instant::now().as_micros()
    }
}
