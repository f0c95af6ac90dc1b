// Project configuration: constants and hardware assignments
#![allow(dead_code)]

// ============================================================================
// LED configuration
// ============================================================================

/// GPIO pin for the board LED
pub const LED_GPIO_PIN: u8 = 8;

/// Delay between LED transitions in milliseconds
///
/// The LED spends this long in each state, so a full on/off cycle
/// takes twice this value.
pub const BLINK_INTERVAL_MS: u64 = 200;

// ============================================================================
// Serial console configuration
// ============================================================================

/// UART baud rate for the serial console
pub const UART_BAUD_RATE: u32 = 115_200;

/// GPIO pin for UART0 TX
pub const UART_TX_PIN: u8 = 16;

/// GPIO pin for UART0 RX
///
/// Bound at init like TX, but the console is used write-only.
pub const UART_RX_PIN: u8 = 17;

/// Startup banner transmitted once over the serial console
///
/// Loaded at build time from the environment variable BLINK_BANNER
/// (see build.rs). The text is sent verbatim, no escaping is applied.
pub const BANNER: &str = env!("BLINK_BANNER");
