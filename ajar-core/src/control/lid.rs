//! Lid controller
//!
//! Owns the lid state and the open timestamp, consumes one distance
//! sample per tick, and emits actuation commands. The controller never
//! touches hardware; the caller forwards commands to a
//! [`LidActuator`](crate::traits::LidActuator).

use crate::config::{BinConfig, DwellPolicy};
use crate::range::DistanceSample;
use crate::state::{Event, LidState};

/// Actuation command for the lid servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidCommand {
    /// Move to the open angle
    Open { angle_deg: u8 },
    /// Move to the closed angle
    Close { angle_deg: u8 },
}

impl LidCommand {
    /// Target angle in degrees
    pub fn angle_deg(&self) -> u8 {
        match *self {
            LidCommand::Open { angle_deg } | LidCommand::Close { angle_deg } => angle_deg,
        }
    }
}

/// Tick-driven lid controller
///
/// `tick` is the sole mutating entry point. Each tick issues at most one
/// command; a tick that changes nothing issues none.
#[derive(Debug)]
pub struct LidController {
    config: BinConfig,
    state: LidState,
    /// Monotonic time of the last open transition; `Some` iff open
    opened_at_ms: Option<u64>,
}

impl LidController {
    /// Create a controller in the closed state
    pub fn new(config: BinConfig) -> Self {
        Self {
            config,
            state: LidState::Closed,
            opened_at_ms: None,
        }
    }

    /// Current lid state
    pub fn state(&self) -> LidState {
        self.state
    }

    /// Check whether a sample falls inside the detection window
    ///
    /// Zero is excluded: a 0 cm reading is a valid touching-the-sensor
    /// echo but sits below the decision window. The threshold itself is
    /// inclusive. `NoEcho` is never in range.
    fn in_range(&self, sample: DistanceSample) -> bool {
        match sample {
            DistanceSample::Cm(d) => d > 0 && d <= self.config.detect_threshold_cm,
            DistanceSample::NoEcho => false,
        }
    }

    /// Advance one tick
    ///
    /// Opening is evaluated while closed, closing while open; the rules
    /// touch disjoint states, so a single tick never opens and closes.
    /// A detection while already open does not restart the dwell window
    /// unless the config selects [`DwellPolicy::ExtendOnPresence`].
    pub fn tick(&mut self, sample: DistanceSample, now_ms: u64) -> Option<LidCommand> {
        match self.state {
            LidState::Closed => {
                if self.in_range(sample) {
                    self.state = self.state.transition(Event::ObjectDetected);
                    self.opened_at_ms = Some(now_ms);
                    return Some(LidCommand::Open {
                        angle_deg: self.config.open_angle_deg,
                    });
                }
                None
            }
            LidState::Open => {
                if self.config.dwell_policy == DwellPolicy::ExtendOnPresence
                    && self.in_range(sample)
                {
                    // Checked before expiry so a detection on the expiry
                    // tick keeps the lid open
                    self.opened_at_ms = Some(now_ms);
                }

                match self.opened_at_ms {
                    Some(opened_at)
                        if now_ms.saturating_sub(opened_at)
                            >= u64::from(self.config.open_dwell_ms) =>
                    {
                        self.state = self.state.transition(Event::DwellElapsed);
                        self.opened_at_ms = None;
                        Some(LidCommand::Close {
                            angle_deg: self.config.closed_angle_deg,
                        })
                    }
                    _ => None,
                }
            }
        }
    }
}
