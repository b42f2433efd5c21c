//! Monotonic clock trait

/// Monotonic microsecond counter
///
/// Used by drivers that time pulse widths. Implementations must not go
/// backwards and must not wrap within the life of a measurement.
///
/// Takes `&mut self` for parity with the other hardware traits; reading
/// a timer peripheral may require mutable access.
pub trait Monotonic {
    /// Current reading in microseconds
    fn now_us(&mut self) -> u64;
}
