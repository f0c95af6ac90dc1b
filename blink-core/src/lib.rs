//! Blink Core - Platform-agnostic Logic and Traits
//!
//! This crate has NO hardware dependencies.
//! It defines only traits and pure functions.

#![no_std]

pub mod logic;
pub mod traits;
pub mod types;

// Re-exports for convenient access
pub use logic::{Blinker, announce, level_at};
pub use traits::{DigitalOutput, PinError, SerialError, SerialTx};
pub use types::PinLevel;
