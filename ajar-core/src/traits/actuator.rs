//! Lid actuator trait

/// Trait for the lid positioning actuator
///
/// Commands are fire-and-forget: implementations move the lid toward the
/// requested angle and report nothing back. The polling cadence is slow
/// enough that mechanical travel time never affects the next decision.
pub trait LidActuator {
    /// Command the lid to the given angle in degrees
    fn set_angle(&mut self, angle_deg: u8);
}
