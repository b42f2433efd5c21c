//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod clock;
pub mod sensor;

pub use actuator::LidActuator;
pub use clock::Monotonic;
pub use sensor::RangeSensor;
