// Blink task - drives the board LED and the startup banner
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal::Blocking;
use esp_hal::gpio::Output;
use esp_hal::uart::Uart;

use crate::config::{BANNER, BLINK_INTERVAL_MS};
use crate::hal::{GpioLed, UartConsole};
use blink_core::{Blinker, DigitalOutput, SerialTx, announce};

/// Blink logic - testable control loop without hardware dependency
///
/// Transmits the banner once, then toggles the LED forever with a fixed
/// delay between transitions. The loop has no exit condition; the firmware
/// runs until reset or power-off.
///
/// # Trait-based abstraction
/// The generic parameters allow:
/// - Real hardware (GpioLed, UartConsole) in production code
/// - Mock implementations in host tests
///
/// # Parameters
/// - `led`: LED pin (hardware or mock)
/// - `console`: serial console (hardware or mock)
/// - `banner`: externally supplied banner text, sent verbatim
pub async fn blink_logic<P: DigitalOutput, S: SerialTx>(
    mut led: P,
    mut console: S,
    banner: &str,
) -> ! {
    // Banner goes out exactly once, before the first pin toggle
    if announce(&mut console, banner).is_err() {
        error!("Failed to write banner to serial console");
    }

    let mut blinker = Blinker::new();

    // Main loop: blinks the LED endlessly
    loop {
        match blinker.step(&mut led) {
            Ok(level) => info!("LED {}", level),
            Err(_e) => error!("Failed to write to LED pin"),
        }

        // Async delay: yields the CPU to other tasks
        Timer::after(Duration::from_millis(BLINK_INTERVAL_MS)).await;
    }
}

/// Blink task - embassy task wrapping the hardware handles
///
/// Receives the already constructed peripherals from main, wraps them in
/// the trait implementations and hands off to the testable `blink_logic()`.
///
/// # Parameters
/// - `led_pin`: GPIO output bound to the board LED
/// - `uart`: UART0 with its fixed TX/RX binding
#[embassy_executor::task]
pub async fn blink_task(led_pin: Output<'static>, uart: Uart<'static, Blocking>) -> ! {
    let led = GpioLed::new(led_pin);
    let console = UartConsole::new(uart);

    blink_logic(led, console, BANNER).await
}
