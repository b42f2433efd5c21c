//! Ajar - automated waste bin firmware
//!
//! Main firmware binary for RP2040-based bins. An HC-SR04 ultrasonic
//! sensor watches for an approaching object; a hobby servo lifts the
//! lid, holds it through the dwell window, and lowers it again.
//!
//! Pin assignment (adjust for your board):
//! - GPIO17: ultrasonic trigger
//! - GPIO16: ultrasonic echo
//! - GPIO14: servo PWM (slice 7, channel A)
//! - GPIO0/1: UART0 diagnostics feed

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_time::Delay;
use fixed::traits::ToFixed;
use {defmt_rtt as _, panic_probe as _};

use ajar_drivers::actuator::{PwmServo, ServoConfig};
use ajar_drivers::sensor::{HcSr04, HcSr04Config};

use crate::clock::UptimeClock;
use crate::config::BIN_CONFIG;

mod channels;
mod clock;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ajar firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // A compile-time config can only be wrong at the bench; refuse to run
    let bin_config = BIN_CONFIG;
    if let Err(e) = bin_config.validate() {
        defmt::panic!("Invalid bin config: {:?}", e);
    }

    // Ultrasonic sensor pins
    let trigger = Output::new(p.PIN_17, Level::Low);
    let echo = Input::new(p.PIN_16, Pull::Down);
    let sensor_config = HcSr04Config {
        echo_timeout_us: bin_config.echo_timeout_us,
        ..Default::default()
    };
    let sensor = HcSr04::new(trigger, echo, Delay, UptimeClock, sensor_config);
    info!("Ultrasonic sensor initialized");

    // Servo PWM: 125 MHz system clock / 125 gives a 1 MHz count clock,
    // so compare values are microseconds; top 19999 makes the 50 Hz frame
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = 125.to_fixed();
    pwm_config.top = 19_999;
    let pwm = Pwm::new_output_a(p.PWM_SLICE7, p.PIN_14, pwm_config);
    let (Some(servo_out), _) = pwm.split() else {
        defmt::panic!("PWM slice has no channel A output");
    };
    let servo = PwmServo::new(servo_out, ServoConfig::default());
    info!("Servo PWM initialized (50 Hz frame)");

    // UART0 for the serial diagnostics feed
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    info!("UART initialized for diagnostics");

    // Spawn tasks
    spawner.spawn(tasks::lid_task(sensor, servo, bin_config)).unwrap();
    spawner.spawn(tasks::diag_task(uart)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
