//! Call-recording RawPin for integration tests.
//!
//! Wraps a [`SimBoard`] and records every primitive call so tests can assert
//! on the exact order of hardware accesses, not just the final pin state.

use std::cell::RefCell;

use ioscan::adapters::sim::SimBoard;
use ioscan::{PinId, PinMode, RawPin};

// ── Raw call record ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PinCall {
    Configure(PinId, PinMode),
    ReadDigital(PinId),
    WriteDigital(PinId, bool),
    ReadAnalog(PinId),
    WriteAnalog(PinId, u16),
}

// ── RecordingPins ─────────────────────────────────────────────

pub struct RecordingPins {
    pub board: SimBoard,
    calls: RefCell<Vec<PinCall>>,
}

#[allow(dead_code)]
impl RecordingPins {
    pub fn new() -> Self {
        Self {
            board: SimBoard::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PinCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn writes(&self) -> Vec<PinCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, PinCall::WriteDigital(..) | PinCall::WriteAnalog(..)))
            .cloned()
            .collect()
    }

    pub fn touched(&self, pin: PinId) -> bool {
        self.calls.borrow().iter().any(|c| match c {
            PinCall::Configure(p, _)
            | PinCall::ReadDigital(p)
            | PinCall::WriteDigital(p, _)
            | PinCall::ReadAnalog(p)
            | PinCall::WriteAnalog(p, _) => *p == pin,
        })
    }

    fn record(&self, call: PinCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Default for RecordingPins {
    fn default() -> Self {
        Self::new()
    }
}

impl RawPin for RecordingPins {
    fn configure_mode(&self, pin: PinId, mode: PinMode) {
        self.record(PinCall::Configure(pin, mode));
        self.board.configure_mode(pin, mode);
    }

    fn read_digital(&self, pin: PinId) -> bool {
        self.record(PinCall::ReadDigital(pin));
        self.board.read_digital(pin)
    }

    fn write_digital(&self, pin: PinId, high: bool) {
        self.record(PinCall::WriteDigital(pin, high));
        self.board.write_digital(pin, high);
    }

    fn read_analog(&self, pin: PinId) -> u16 {
        self.record(PinCall::ReadAnalog(pin));
        self.board.read_analog(pin)
    }

    fn write_analog(&self, pin: PinId, code: u16) {
        self.record(PinCall::WriteAnalog(pin, code));
        self.board.write_analog(pin, code);
    }
}
