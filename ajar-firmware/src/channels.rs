//! Inter-task communication channels
//!
//! Static embassy-sync primitives connecting the lid control loop to the
//! observational diagnostics task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use ajar_core::control::LidCommand;
use ajar_core::range::DistanceSample;
use ajar_core::state::LidState;

/// One tick's worth of observable state
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// The sample this tick consumed
    pub sample: DistanceSample,
    /// Lid state after the tick
    pub state: LidState,
    /// Command issued this tick, if any
    pub command: Option<LidCommand>,
}

/// Latest tick report for the diagnostics task
///
/// A Signal keeps only the newest value: diagnostics may drop ticks,
/// control never blocks on it.
pub static TICK_REPORT: Signal<CriticalSectionRawMutex, TickReport> = Signal::new();
