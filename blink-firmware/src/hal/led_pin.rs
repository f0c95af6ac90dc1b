// LED pin implementation of the DigitalOutput trait
//
// Wraps the GPIO output driving the board LED so the blink logic can
// run against mock implementations in tests.

use blink_core::{DigitalOutput, PinError, PinLevel};

// ============================================================================
// Real hardware implementation (ESP32 target only)
// ============================================================================

#[cfg(not(test))]
mod real_impl {
    use super::*;
    use esp_hal::gpio::Output;

    /// Real hardware LED pin
    ///
    /// Owns the GPIO output line bound to the board LED. Constructed once
    /// at startup and moved into the blink task for the lifetime of the
    /// firmware.
    pub struct GpioLed<'a> {
        pin: Output<'a>,
    }

    impl<'a> GpioLed<'a> {
        /// Wraps an already configured GPIO output
        ///
        /// # Parameters
        /// - `pin`: output line for the LED (see config::LED_GPIO_PIN)
        pub fn new(pin: Output<'a>) -> Self {
            Self { pin }
        }
    }

    impl<'a> DigitalOutput for GpioLed<'a> {
        fn set_level(&mut self, level: PinLevel) -> Result<(), PinError> {
            // GPIO writes cannot fail on this chip
            match level {
                PinLevel::High => self.pin.set_high(),
                PinLevel::Low => self.pin.set_low(),
            }
            Ok(())
        }
    }
}

#[cfg(not(test))]
pub use real_impl::GpioLed;

// ============================================================================
// Mock implementation (tests only)
// ============================================================================

#[cfg(test)]
pub struct MockPin {
    /// Last level written (for assertions in tests)
    pub last_level: Option<PinLevel>,
    /// Number of set_level() calls
    pub set_count: usize,
    /// Simulate a failure on the next set_level()
    pub fail_next_set: bool,
}

#[cfg(test)]
impl MockPin {
    pub fn new() -> Self {
        Self {
            last_level: None,
            set_count: 0,
            fail_next_set: false,
        }
    }
}

#[cfg(test)]
impl DigitalOutput for MockPin {
    fn set_level(&mut self, level: PinLevel) -> Result<(), PinError> {
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(PinError::WriteFailed);
        }

        self.last_level = Some(level);
        self.set_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
