//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware embeds one
//! [`BinConfig`] at compile time; it is immutable for the process lifetime.

pub mod types;

pub use types::*;
