//! Serial diagnostics task
//!
//! Observational only: formats each tick report into a human-readable
//! line and writes it out UART0. Nothing here feeds back into control.

use core::fmt::Write as FmtWrite;

use defmt::{info, warn};
use embassy_rp::uart::{Blocking, Uart};
use embedded_io::Write;
use heapless::String;

use ajar_core::control::LidCommand;
use ajar_core::range::DistanceSample;

use crate::channels::TICK_REPORT;

/// One formatted line fits well under this
const LINE_CAP: usize = 64;

/// Diagnostics task - serial feed of distance readings and lid events
#[embassy_executor::task]
pub async fn diag_task(mut uart: Uart<'static, Blocking>) {
    info!("Diag task started");

    let _ = uart.write_all(b"Automatic bin ready\r\n");

    loop {
        let report = TICK_REPORT.wait().await;

        let mut line: String<LINE_CAP> = String::new();
        match report.sample {
            DistanceSample::Cm(d) => {
                let _ = write!(line, "Distance: {} cm", d);
            }
            DistanceSample::NoEcho => {
                let _ = line.push_str("Distance: no echo");
            }
        }
        match report.command {
            Some(LidCommand::Open { .. }) => {
                let _ = line.push_str(" | Opening lid...");
            }
            Some(LidCommand::Close { .. }) => {
                let _ = line.push_str(" | Closing lid...");
            }
            None => {}
        }
        let _ = line.push_str("\r\n");

        if let Err(e) = uart.write_all(line.as_bytes()) {
            warn!("Diag write failed: {:?}", e);
        }
    }
}
