//! Lid control task
//!
//! The single thread of control for the bin: each tick runs
//! measure -> decide -> actuate to completion, then waits out the poll
//! interval. Nothing else touches the sensor, the servo, or the
//! controller state. The echo wait inside `measure` is a bounded
//! blocking wait, never longer than the configured echo timeout.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};

use ajar_core::config::BinConfig;
use ajar_core::control::{LidCommand, LidController};
use ajar_core::traits::{LidActuator, RangeSensor};
use ajar_drivers::actuator::PwmServo;
use ajar_drivers::sensor::HcSr04;

use crate::channels::{TickReport, TICK_REPORT};
use crate::clock::UptimeClock;

/// How long the servo gets to reach the closed position at boot
const SERVO_SETTLE_MS: u64 = 500;

/// Lid control task - the sense/decide/actuate loop
#[embassy_executor::task]
pub async fn lid_task(
    mut sensor: HcSr04<Output<'static>, Input<'static>, Delay, UptimeClock>,
    mut servo: PwmServo<PwmOutput<'static>>,
    config: BinConfig,
) {
    info!("Lid task started");

    // Start from the physical closed position
    servo.set_angle(config.closed_angle_deg);
    Timer::after_millis(SERVO_SETTLE_MS).await;
    info!("Automatic bin ready");

    let mut controller = LidController::new(config);
    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.poll_interval_ms)));

    loop {
        let sample = sensor.measure();
        let now_ms = start.elapsed().as_millis();

        let command = controller.tick(sample, now_ms);
        match command {
            Some(LidCommand::Open { angle_deg }) => {
                info!("Opening lid");
                servo.set_angle(angle_deg);
            }
            Some(LidCommand::Close { angle_deg }) => {
                info!("Closing lid");
                servo.set_angle(angle_deg);
            }
            None => {}
        }

        TICK_REPORT.signal(TickReport {
            sample,
            state: controller.state(),
            command,
        });

        ticker.next().await;
    }
}
