//! State machine definition
//!
//! All lid behavior is a function of the current state and an event.

use super::events::Event;

/// Lid states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidState {
    /// Lid closed, watching for an object in range
    #[default]
    Closed,
    /// Lid held open, waiting out the dwell window
    Open,
}

impl LidState {
    /// Check if the lid is open
    pub fn is_open(&self) -> bool {
        matches!(self, LidState::Open)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic. Dwell bookkeeping lives
    /// in the controller; a repeated detection while open is a no-op here.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use LidState::*;

        match (self, event) {
            (Closed, ObjectDetected) => Open,
            (Open, DwellElapsed) => Closed,

            // Default: stay in current state
            _ => self,
        }
    }
}
