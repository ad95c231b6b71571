//! Power and reset sequencing
//!
//! Drives the optional panel supply and the mandatory reset line. The reset
//! pulse widths are minimums from the ILI9488 datasheet rounded up to whole
//! milliseconds and then some, so that coarse delay sources still honor them.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::board::PowerSupply;

/// Reset asserted hold, datasheet minimum 10us (50us recommended)
pub const RESET_ASSERT_MS: u32 = 1;

/// Hold after reset release before the first command, datasheet minimum 5ms
pub const RESET_RELEASE_MS: u32 = 10;

/// Reset line and optional supply of one panel
pub struct PowerSequencer<RST, PS> {
    /// Reset line
    reset: RST,
    /// Panel supply, if the board has a switchable one
    supply: Option<PS>,
    /// Reset polarity (true = asserted when high)
    reset_active_high: bool,
}

impl<RST, PS> PowerSequencer<RST, PS>
where
    RST: OutputPin,
    PS: PowerSupply,
{
    /// Create a sequencer over an active-low reset line
    pub fn new(reset: RST, supply: Option<PS>) -> Self {
        Self {
            reset,
            supply,
            reset_active_high: false,
        }
    }

    /// Set reset polarity
    pub fn set_reset_active_high(&mut self, active_high: bool) {
        self.reset_active_high = active_high;
    }

    /// True if a switchable supply is configured
    pub fn has_supply(&self) -> bool {
        self.supply.is_some()
    }

    /// Switch the supply on
    ///
    /// Succeeds without doing anything if no supply is configured.
    ///
    /// # Errors
    ///
    /// Returns the supply error if the regulator refuses.
    pub fn enable_power(&mut self) -> Result<(), PS::Error> {
        match self.supply.as_mut() {
            Some(supply) => {
                log::debug!("enabling panel supply");
                supply.set_enable(true)
            }
            None => Ok(()),
        }
    }

    /// Switch the supply off
    ///
    /// Succeeds without doing anything if no supply is configured.
    ///
    /// # Errors
    ///
    /// Returns the supply error if the regulator refuses.
    pub fn disable_power(&mut self) -> Result<(), PS::Error> {
        match self.supply.as_mut() {
            Some(supply) => supply.set_enable(false),
            None => Ok(()),
        }
    }

    /// Drive the reset line to its asserted level
    pub fn assert_reset(&mut self) {
        self.set_reset(true);
    }

    /// Drive the reset line to its normal operating level
    pub fn release_reset(&mut self) {
        self.set_reset(false);
    }

    /// Reset pulse: assert, hold, release, hold
    ///
    /// Returns only once the panel is ready to accept commands.
    pub fn pulse_reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.assert_reset();
        delay.delay_ms(RESET_ASSERT_MS);
        self.release_reset();
        delay.delay_ms(RESET_RELEASE_MS);
    }

    /// Give back the reset line and supply
    pub fn release(self) -> (RST, Option<PS>) {
        (self.reset, self.supply)
    }

    fn set_reset(&mut self, asserted: bool) {
        // Line writes cannot meaningfully fail on the boards this targets
        let _ = if asserted == self.reset_active_high {
            self.reset.set_high()
        } else {
            self.reset.set_low()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        High,
        Low,
        Delay(u32),
        Supply(bool),
    }

    type Log = RefCell<Vec<Event>>;

    struct Pin<'a>(&'a Log);
    struct Supply<'a>(&'a Log, bool);
    struct Delay<'a>(&'a Log);

    impl embedded_hal::digital::ErrorType for Pin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for Pin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Low);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::High);
            Ok(())
        }
    }

    impl PowerSupply for Supply<'_> {
        type Error = ();

        fn set_enable(&mut self, enable: bool) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Supply(enable));
            if self.1 { Err(()) } else { Ok(()) }
        }
    }

    impl DelayNs for Delay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Event::Delay(ns / 1_000_000));
        }
        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Event::Delay(ms));
        }
    }

    #[test]
    fn test_pulse_reset_holds_both_levels_in_order() {
        let log = Log::default();
        let mut seq: PowerSequencer<_, Supply<'_>> = PowerSequencer::new(Pin(&log), None);
        seq.pulse_reset(&mut Delay(&log));

        assert_eq!(
            *log.borrow(),
            [
                Event::Low,
                Event::Delay(RESET_ASSERT_MS),
                Event::High,
                Event::Delay(RESET_RELEASE_MS),
            ]
        );
    }

    #[test]
    fn test_pulse_reset_active_high() {
        let log = Log::default();
        let mut seq: PowerSequencer<_, Supply<'_>> = PowerSequencer::new(Pin(&log), None);
        seq.set_reset_active_high(true);
        seq.pulse_reset(&mut Delay(&log));

        assert_eq!(log.borrow()[0], Event::High);
        assert_eq!(log.borrow()[2], Event::Low);
    }

    #[test]
    fn test_enable_power_without_supply_is_noop() {
        let log = Log::default();
        let mut seq: PowerSequencer<_, Supply<'_>> = PowerSequencer::new(Pin(&log), None);
        assert!(!seq.has_supply());
        assert_eq!(seq.enable_power(), Ok(()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_enable_power_switches_supply() {
        let log = Log::default();
        let mut seq = PowerSequencer::new(Pin(&log), Some(Supply(&log, false)));
        assert_eq!(seq.enable_power(), Ok(()));
        assert_eq!(seq.disable_power(), Ok(()));
        assert_eq!(*log.borrow(), [Event::Supply(true), Event::Supply(false)]);
    }

    #[test]
    fn test_enable_power_reports_supply_failure() {
        let log = Log::default();
        let mut seq = PowerSequencer::new(Pin(&log), Some(Supply(&log, true)));
        assert_eq!(seq.enable_power(), Err(()));
    }
}
