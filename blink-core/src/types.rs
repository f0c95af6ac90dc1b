//! Core Types for the Blink Loop
//!
//! Data structures without hardware dependencies

/// Logical state of a digital output line
///
/// `High` drives the LED on, `Low` drives it off. The mapping to a
/// voltage level is the concern of the hardware implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    High,
    Low,
}

impl PinLevel {
    /// Returns the opposite level
    pub fn toggled(self) -> Self {
        match self {
            PinLevel::High => PinLevel::Low,
            PinLevel::Low => PinLevel::High,
        }
    }

    /// True when the LED is driven on
    pub fn is_on(self) -> bool {
        matches!(self, PinLevel::High)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinLevel::High => defmt::write!(fmt, "High"),
            PinLevel::Low => defmt::write!(fmt, "Low"),
        }
    }
}
