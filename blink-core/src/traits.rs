//! Hardware Abstraction Traits
//!
//! These traits define interfaces for hardware access
//! without a concrete implementation.

use crate::types::PinLevel;

/// Error type for pin operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    WriteFailed,
}

/// Error type for serial transmit operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    WriteFailed,
}

/// Trait for a digital output line driving the LED
///
/// # Implementations
/// - **Production:** GpioLed (ESP32 GPIO peripheral)
/// - **Testing:** MockPin (in-memory mock)
pub trait DigitalOutput: Send {
    /// Drives the output to the given logical level
    ///
    /// # Errors
    /// Returns `PinError::WriteFailed` if the hardware access fails
    fn set_level(&mut self, level: PinLevel) -> Result<(), PinError>;
}

/// Trait for the transmit half of a serial console
///
/// The blink loop only ever writes; the receive direction is unused.
///
/// # Implementations
/// - **Production:** UartConsole (ESP32 UART peripheral)
/// - **Testing:** MockSerial (in-memory mock)
pub trait SerialTx: Send {
    /// Transmits all bytes, blocking until they are accepted
    ///
    /// # Errors
    /// Returns `SerialError::WriteFailed` if the hardware access fails
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError>;
}
