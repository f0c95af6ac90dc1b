//! Pure Blink Logic
//!
//! Functions without hardware dependencies (testable!)

use crate::traits::{DigitalOutput, PinError, SerialError, SerialTx};
use crate::types::PinLevel;

/// Expected LED level at a point in time after startup
///
/// The first transition drives the LED on at `t = 0`, so the level is
/// `High` whenever an even number of whole periods has elapsed.
///
/// # Examples
///
/// ```
/// # use blink_core::{PinLevel, level_at};
/// assert_eq!(level_at(0, 200), PinLevel::High);
/// assert_eq!(level_at(200, 200), PinLevel::Low);
/// assert_eq!(level_at(400, 200), PinLevel::High);
/// ```
pub fn level_at(elapsed_ms: u64, period_ms: u64) -> PinLevel {
    debug_assert!(period_ms > 0);
    if (elapsed_ms / period_ms) % 2 == 0 {
        PinLevel::High
    } else {
        PinLevel::Low
    }
}

/// Transmits the banner exactly once over the serial console
///
/// The banner text is supplied by an upstream substitution step and is
/// forwarded verbatim, without any parsing or escaping.
pub fn announce<S: SerialTx>(serial: &mut S, banner: &str) -> Result<(), SerialError> {
    serial.write_all(banner.as_bytes())
}

/// Two-state blink machine: ON and OFF with unconditional transitions
///
/// A fresh `Blinker` is in the OFF state; the first [`Blinker::step`]
/// drives the pin high. There is no terminal state - the machine toggles
/// for as long as it is stepped.
pub struct Blinker {
    level: PinLevel,
}

impl Blinker {
    /// Creates a blinker in the OFF state (LED level at reset)
    pub fn new() -> Self {
        Self {
            level: PinLevel::Low,
        }
    }

    /// Current output level
    pub fn level(&self) -> PinLevel {
        self.level
    }

    /// Advances the state machine and returns the new level
    pub fn advance(&mut self) -> PinLevel {
        self.level = self.level.toggled();
        self.level
    }

    /// Advances the state machine and drives the pin to the new level
    ///
    /// The caller delays for one period between steps; the delay itself is
    /// the concern of the surrounding task, not of this state machine.
    pub fn step<P: DigitalOutput>(&mut self, pin: &mut P) -> Result<PinLevel, PinError> {
        let level = self.advance();
        pin.set_level(level)?;
        Ok(level)
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}
