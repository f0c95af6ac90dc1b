// Serial console implementation of the SerialTx trait
//
// Wraps the UART peripheral behind the transmit-only trait so the
// startup banner can be asserted against a mock in tests.

use blink_core::{SerialError, SerialTx};

// ============================================================================
// Real hardware implementation (ESP32 target only)
// ============================================================================

#[cfg(not(test))]
mod real_impl {
    use super::*;
    use embedded_io::Write;
    use esp_hal::Blocking;
    use esp_hal::uart::Uart;

    /// Real hardware serial console
    ///
    /// Owns UART0 with its fixed TX/RX pin binding (see config.rs).
    /// The receive direction is bound but never read.
    pub struct UartConsole<'a> {
        uart: Uart<'a, Blocking>,
    }

    impl<'a> UartConsole<'a> {
        /// Wraps an already configured UART
        pub fn new(uart: Uart<'a, Blocking>) -> Self {
            Self { uart }
        }
    }

    impl<'a> SerialTx for UartConsole<'a> {
        fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
            self.uart
                .write_all(bytes)
                .map_err(|_| SerialError::WriteFailed)?;
            self.uart.flush().map_err(|_| SerialError::WriteFailed)
        }
    }
}

#[cfg(not(test))]
pub use real_impl::UartConsole;

// ============================================================================
// Mock implementation (tests only)
// ============================================================================

#[cfg(test)]
pub struct MockSerial {
    /// Number of write_all() calls
    pub write_count: usize,
    /// Total bytes accepted across all writes
    pub bytes_written: usize,
    /// Simulate a failure on the next write_all()
    pub fail_next_write: bool,
}

#[cfg(test)]
impl MockSerial {
    pub fn new() -> Self {
        Self {
            write_count: 0,
            bytes_written: 0,
            fail_next_write: false,
        }
    }
}

#[cfg(test)]
impl SerialTx for MockSerial {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(SerialError::WriteFailed);
        }

        self.write_count += 1;
        self.bytes_written += bytes.len();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
