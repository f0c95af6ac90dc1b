// Hardware Abstraction Layer (HAL) module
//
// This module wraps hardware access behind the blink-core traits
// to keep the blink logic testable against mocks.

pub mod led_pin;
pub mod serial;

#[cfg(not(test))]
pub use led_pin::GpioLed;
#[cfg(not(test))]
pub use serial::UartConsole;

#[cfg(test)]
pub use led_pin::MockPin;
#[cfg(test)]
pub use serial::MockSerial;
