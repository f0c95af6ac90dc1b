// Library root: reusable logic and modules
// No standard library (embedded system)
#![no_std]

// Modules
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports from blink-core
pub use blink_core::{Blinker, DigitalOutput, PinLevel, SerialTx, announce, level_at};
