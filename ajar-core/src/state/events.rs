//! Events that trigger lid state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A valid sample inside the detection window arrived
    ObjectDetected,
    /// The open-dwell window ran out
    DwellElapsed,
}
