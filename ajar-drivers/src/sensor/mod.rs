//! Range sensor drivers

pub mod hc_sr04;

pub use hc_sr04::{HcSr04, HcSr04Config};
