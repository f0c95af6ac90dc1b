// No standard library (embedded system)
#![no_std]
// No regular main() entry point (provided by esp_rtos)
#![no_main]
// Forbid mem::forget - dangerous with ESP HAL types holding DMA buffers
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Forbid large stack frames (stack is limited on embedded systems)
#![deny(clippy::large_stack_frames)]

// Embassy async runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace on panic and println!() support
use {esp_backtrace as _, esp_println as _};

// Project modules and configuration
use esp_blinky::config::UART_BAUD_RATE;
use esp_blinky::tasks::blink_task;

// ESP-IDF app descriptor - required by the bootloader!
// Without it flashing fails with "ESP-IDF App Descriptor missing"
esp_bootloader_esp_idf::esp_app_desc!();

/// Main entry point
///
/// Binds both hardware handles exactly once, spawns the blink task and
/// then sleeps. The handles are owned values moved into the task - there
/// is no ambient global state.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 configuration: CPU at maximum clock (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Initialize the embassy runtime (timer + software interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED output, driven low at reset (see config::LED_GPIO_PIN)
    let led_pin = Output::new(peripherals.GPIO8, Level::Low, OutputConfig::default());

    // Serial console on UART0 with its fixed TX/RX binding
    // (see config::UART_TX_PIN / config::UART_RX_PIN)
    let uart_config = UartConfig::default().with_baudrate(UART_BAUD_RATE);
    let uart = Uart::new(peripherals.UART0, uart_config)
        .expect("Failed to initialize UART0")
        .with_tx(peripherals.GPIO16)
        .with_rx(peripherals.GPIO17);

    // Spawn the blink task (banner + endless LED toggle)
    spawner.spawn(blink_task(led_pin, uart)).unwrap();

    // Main loop: sleeps (all work happens in the task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
