//! Integration tests for the blink logic
//!
//! These tests run on the host (x86_64) and use mock hardware

use blink_core::{
    Blinker, DigitalOutput, PinError, PinLevel, SerialError, SerialTx, announce, level_at,
};

// ============================================================================
// Mock pin
// ============================================================================

#[derive(Default)]
pub struct MockPin {
    pub levels: Vec<PinLevel>,
    pub fail_next_set: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&self) -> usize {
        self.levels.len()
    }

    pub fn last_level(&self) -> Option<PinLevel> {
        self.levels.last().copied()
    }
}

impl DigitalOutput for MockPin {
    fn set_level(&mut self, level: PinLevel) -> Result<(), PinError> {
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(PinError::WriteFailed);
        }

        self.levels.push(level);
        Ok(())
    }
}

// ============================================================================
// Mock serial
// ============================================================================

#[derive(Default)]
pub struct MockSerial {
    pub writes: Vec<Vec<u8>>,
    pub fail_next_write: bool,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SerialTx for MockSerial {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(SerialError::WriteFailed);
        }

        self.writes.push(bytes.to_vec());
        Ok(())
    }
}

// ============================================================================
// Tests: MockPin
// ============================================================================

#[test]
fn test_mock_pin_set_level() {
    let mut mock = MockPin::new();

    assert_eq!(mock.set_count(), 0);
    assert_eq!(mock.last_level(), None);

    mock.set_level(PinLevel::High).unwrap();

    assert_eq!(mock.set_count(), 1);
    assert_eq!(mock.last_level(), Some(PinLevel::High));
}

#[test]
fn test_mock_pin_fail() {
    let mut mock = MockPin::new();
    mock.fail_next_set = true;

    let result = mock.set_level(PinLevel::High);
    assert_eq!(result, Err(PinError::WriteFailed));
    assert_eq!(mock.set_count(), 0);
}

#[test]
fn test_mock_pin_recovers_after_fail() {
    let mut mock = MockPin::new();
    mock.fail_next_set = true;

    // First set fails
    let result1 = mock.set_level(PinLevel::High);
    assert!(result1.is_err());

    // Second set succeeds
    let result2 = mock.set_level(PinLevel::Low);
    assert!(result2.is_ok());
    assert_eq!(mock.set_count(), 1);
    assert_eq!(mock.last_level(), Some(PinLevel::Low));
}

// ============================================================================
// Tests: level_at() schedule
// ============================================================================

#[test]
fn test_level_at_startup_is_on() {
    assert_eq!(level_at(0, 200), PinLevel::High);
}

#[test]
fn test_level_at_sampled_every_period() {
    // Pin states observed at t = 0, 200, 400, 600 ms: ON, OFF, ON, OFF
    assert_eq!(level_at(0, 200), PinLevel::High);
    assert_eq!(level_at(200, 200), PinLevel::Low);
    assert_eq!(level_at(400, 200), PinLevel::High);
    assert_eq!(level_at(600, 200), PinLevel::Low);
}

#[test]
fn test_level_at_holds_within_period() {
    assert_eq!(level_at(1, 200), PinLevel::High);
    assert_eq!(level_at(199, 200), PinLevel::High);
    assert_eq!(level_at(201, 200), PinLevel::Low);
    assert_eq!(level_at(399, 200), PinLevel::Low);
}

#[test]
fn test_level_at_parity_for_long_uptimes() {
    // level depends only on the parity of elapsed whole periods
    for k in 0..1000u64 {
        let expected = if k % 2 == 0 {
            PinLevel::High
        } else {
            PinLevel::Low
        };
        assert_eq!(level_at(k * 200, 200), expected);
        assert_eq!(level_at(k * 200 + 199, 200), expected);
    }
}

// ============================================================================
// Tests: Blinker state machine
// ============================================================================

#[test]
fn test_blinker_first_step_drives_on() {
    let mut blinker = Blinker::new();
    let mut pin = MockPin::new();

    let level = blinker.step(&mut pin).unwrap();
    assert_eq!(level, PinLevel::High);
    assert_eq!(pin.levels, vec![PinLevel::High]);
}

#[test]
fn test_blinker_alternates() {
    let mut blinker = Blinker::new();
    let mut pin = MockPin::new();

    for _ in 0..4 {
        blinker.step(&mut pin).unwrap();
    }

    assert_eq!(
        pin.levels,
        vec![PinLevel::High, PinLevel::Low, PinLevel::High, PinLevel::Low]
    );
}

#[test]
fn test_blinker_never_reaches_terminal_state() {
    // Finite approximation of the non-termination property: any number of
    // steps keeps producing alternating transitions
    let mut blinker = Blinker::new();
    let mut pin = MockPin::new();

    for _ in 0..10_000 {
        blinker.step(&mut pin).unwrap();
    }

    assert_eq!(pin.set_count(), 10_000);
    for (i, level) in pin.levels.iter().enumerate() {
        let expected = if i % 2 == 0 {
            PinLevel::High
        } else {
            PinLevel::Low
        };
        assert_eq!(*level, expected);
    }
}

#[test]
fn test_blinker_matches_schedule() {
    // Stepping the machine once per period agrees with level_at()
    let mut blinker = Blinker::new();
    let mut pin = MockPin::new();

    for _ in 0..8 {
        blinker.step(&mut pin).unwrap();
    }

    for (k, level) in pin.levels.iter().enumerate() {
        assert_eq!(*level, level_at(k as u64 * 200, 200));
    }
}

#[test]
fn test_blinker_failed_step_keeps_state() {
    let mut blinker = Blinker::new();
    let mut pin = MockPin::new();
    pin.fail_next_set = true;

    // The machine advanced but the pin saw nothing
    let result = blinker.step(&mut pin);
    assert_eq!(result, Err(PinError::WriteFailed));
    assert_eq!(pin.set_count(), 0);
    assert_eq!(blinker.level(), PinLevel::High);
}

// ============================================================================
// Tests: announce()
// ============================================================================

#[test]
fn test_announce_sends_banner_verbatim() {
    let mut serial = MockSerial::new();

    announce(&mut serial, "BUILD 42").unwrap();

    assert_eq!(serial.writes.len(), 1);
    assert_eq!(serial.writes[0], b"BUILD 42");
}

#[test]
fn test_announce_exactly_one_write() {
    let mut serial = MockSerial::new();

    announce(&mut serial, "BUILD 42").unwrap();

    assert_eq!(serial.writes.len(), 1);
}

#[test]
fn test_announce_propagates_write_failure() {
    let mut serial = MockSerial::new();
    serial.fail_next_write = true;

    let result = announce(&mut serial, "BUILD 42");
    assert_eq!(result, Err(SerialError::WriteFailed));
    assert!(serial.writes.is_empty());
}

// ============================================================================
// Tests: end-to-end startup scenario
// ============================================================================

#[test]
fn test_banner_before_first_toggle() {
    // Inject a banner string "BUILD 42"; the mock serial must receive
    // exactly those bytes before the first pin-state observation
    let mut serial = MockSerial::new();
    let mut pin = MockPin::new();
    let mut blinker = Blinker::new();

    announce(&mut serial, "BUILD 42").unwrap();

    // Banner is out, pin is still untouched
    assert_eq!(serial.writes, vec![b"BUILD 42".to_vec()]);
    assert_eq!(pin.set_count(), 0);

    // First four transitions: ON, OFF, ON, OFF
    for _ in 0..4 {
        blinker.step(&mut pin).unwrap();
    }
    assert_eq!(
        pin.levels,
        vec![PinLevel::High, PinLevel::Low, PinLevel::High, PinLevel::Low]
    );

    // Still exactly one serial write - the banner is never repeated
    assert_eq!(serial.writes.len(), 1);
}
