//! Tick-driven lid control
//!
//! Consumes one distance sample per poll tick and decides when the lid
//! opens and closes.

pub mod lid;

pub use lid::{LidCommand, LidController};
