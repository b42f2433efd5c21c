//! HC-SR04 ultrasonic range sensor driver
//!
//! Bit-banged over two GPIOs: a 10 µs trigger pulse starts a
//! measurement, then the sensor raises the echo line for the duration of
//! the ultrasonic round trip. Pulse width is measured against an
//! injected monotonic clock.
//!
//! `measure` blocks the caller, but never for longer than the configured
//! echo timeout; a measurement that does not complete in time reports
//! [`DistanceSample::NoEcho`].

use ajar_core::range::{round_trip_us_to_cm, DistanceSample};
use ajar_core::traits::{Monotonic, RangeSensor};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// HC-SR04 timing configuration
///
/// The settle and trigger widths come from the sensor datasheet and
/// should not normally change.
#[derive(Debug, Clone)]
pub struct HcSr04Config {
    /// Quiet time on the trigger line before the pulse (µs)
    pub settle_us: u32,
    /// Trigger pulse width (µs)
    pub trigger_pulse_us: u32,
    /// Max wait for the echo pulse to start and finish (µs)
    pub echo_timeout_us: u32,
}

impl Default for HcSr04Config {
    fn default() -> Self {
        Self {
            settle_us: 2,
            trigger_pulse_us: 10,
            echo_timeout_us: 30_000,
        }
    }
}

/// HC-SR04 driver
pub struct HcSr04<Trig, Echo, D, C> {
    trigger: Trig,
    echo: Echo,
    delay: D,
    clock: C,
    config: HcSr04Config,
}

impl<Trig, Echo, D, C> HcSr04<Trig, Echo, D, C>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: Monotonic,
{
    /// Create a new driver over the given pins, delay, and clock
    pub fn new(trigger: Trig, echo: Echo, delay: D, clock: C, config: HcSr04Config) -> Self {
        Self {
            trigger,
            echo,
            delay,
            clock,
            config,
        }
    }

    /// A pin read fault reads as low and falls into the timeout path
    fn echo_is_high(&mut self) -> bool {
        self.echo.is_high().unwrap_or(false)
    }

    /// Measure one echo pulse width, or `None` if the pulse did not
    /// start and finish inside the timeout window
    fn echo_pulse_us(&mut self) -> Option<u32> {
        let deadline = self.clock.now_us() + u64::from(self.config.echo_timeout_us);

        // Wait for the rising edge
        while !self.echo_is_high() {
            if self.clock.now_us() >= deadline {
                return None;
            }
        }
        let rise = self.clock.now_us();

        // Wait for the falling edge; shares the deadline so the whole
        // measurement stays inside one timeout window
        while self.echo_is_high() {
            if self.clock.now_us() >= deadline {
                return None;
            }
        }
        let fall = self.clock.now_us();

        Some((fall - rise) as u32)
    }
}

impl<Trig, Echo, D, C> RangeSensor for HcSr04<Trig, Echo, D, C>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: Monotonic,
{
    fn measure(&mut self) -> DistanceSample {
        // Quiet the trigger line, then the 10 µs pulse
        self.trigger.set_low().ok();
        self.delay.delay_us(self.config.settle_us);
        self.trigger.set_high().ok();
        self.delay.delay_us(self.config.trigger_pulse_us);
        self.trigger.set_low().ok();

        match self.echo_pulse_us() {
            Some(width) => DistanceSample::Cm(round_trip_us_to_cm(width)),
            None => DistanceSample::NoEcho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Simulated microsecond timeline shared by the mock peripherals
    struct SimTime(Cell<u64>);

    impl SimTime {
        fn new() -> Self {
            SimTime(Cell::new(0))
        }

        fn advance(&self, us: u64) {
            self.0.set(self.0.get() + us);
        }

        fn get(&self) -> u64 {
            self.0.get()
        }
    }

    struct MockTrigger;

    impl ErrorType for MockTrigger {
        type Error = Infallible;
    }

    impl OutputPin for MockTrigger {
        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    /// Echo line that is high for a scripted window of simulated time
    struct MockEcho<'a> {
        time: &'a SimTime,
        rise_at: u64,
        fall_at: u64,
    }

    impl ErrorType for MockEcho<'_> {
        type Error = Infallible;
    }

    impl InputPin for MockEcho<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            let now = self.time.get();
            Ok(now >= self.rise_at && now < self.fall_at)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            self.is_high().map(|h| !h)
        }
    }

    /// Delay that advances simulated time instead of sleeping
    struct MockDelay<'a> {
        time: &'a SimTime,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.time.advance(u64::from(ns) / 1000);
        }
    }

    /// Clock that advances one simulated microsecond per read, standing
    /// in for the cost of a busy-wait iteration
    struct MockClock<'a> {
        time: &'a SimTime,
    }

    impl Monotonic for MockClock<'_> {
        fn now_us(&mut self) -> u64 {
            self.time.advance(1);
            self.time.get()
        }
    }

    fn driver<'a>(
        time: &'a SimTime,
        rise_at: u64,
        fall_at: u64,
    ) -> HcSr04<MockTrigger, MockEcho<'a>, MockDelay<'a>, MockClock<'a>> {
        HcSr04::new(
            MockTrigger,
            MockEcho { time, rise_at, fall_at },
            MockDelay { time },
            MockClock { time },
            HcSr04Config::default(),
        )
    }

    #[test]
    fn test_measures_echo_pulse() {
        let time = SimTime::new();
        // 1000 µs pulse width: 17 cm
        let mut sensor = driver(&time, 500, 1500);
        assert_eq!(sensor.measure(), DistanceSample::Cm(17));
    }

    #[test]
    fn test_touching_object_reads_zero_not_sentinel() {
        let time = SimTime::new();
        // 20 µs pulse truncates to 0 cm, still a valid reading
        let mut sensor = driver(&time, 100, 120);
        assert_eq!(sensor.measure(), DistanceSample::Cm(0));
    }

    #[test]
    fn test_no_echo_times_out() {
        let time = SimTime::new();
        let mut sensor = driver(&time, u64::MAX, u64::MAX);
        assert_eq!(sensor.measure(), DistanceSample::NoEcho);
        // The wait is bounded by the timeout, give or take a poll
        assert!(time.get() < 31_000);
        assert!(time.get() >= 30_000);
    }

    #[test]
    fn test_unterminated_echo_times_out() {
        let time = SimTime::new();
        // Pulse starts but never falls inside the window
        let mut sensor = driver(&time, 500, u64::MAX);
        assert_eq!(sensor.measure(), DistanceSample::NoEcho);
        assert!(time.get() < 31_000);
    }

    #[test]
    fn test_back_to_back_measurements() {
        let time = SimTime::new();
        // Second echo scripted relative to where the first measurement
        // leaves the timeline
        let mut sensor = driver(&time, 500, 1500);
        assert_eq!(sensor.measure(), DistanceSample::Cm(17));
        let after_first = time.get();
        sensor.echo.rise_at = after_first + 300;
        sensor.echo.fall_at = after_first + 300 + 580;
        // 580 µs round trip: 9 cm
        assert_eq!(sensor.measure(), DistanceSample::Cm(9));
    }
}
