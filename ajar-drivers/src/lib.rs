//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ajar-core:
//!
//! - HC-SR04 ultrasonic range sensor
//! - PWM hobby servo lid actuator
//!
//! Drivers are written against `embedded-hal` 1.0 traits plus the core
//! clock trait, so they run unmodified on any board and under test.

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod sensor;
