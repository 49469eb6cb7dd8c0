//! Simulated board — an in-memory [`RawPin`] for host tests and demos.
//!
//! Models just enough electrical behaviour to exercise the wrappers:
//!
//! - an input that nobody drives reads its pull level (pull-up → high,
//!   pull-down → low, floating → low);
//! - an output reads back the level last written to it;
//! - analog inputs return whatever code the test injected, analog outputs
//!   remember the last code written.
//!
//! State lives in a fixed-capacity map behind a `RefCell`, so a board can
//! be shared by reference between any number of wrappers on one thread.

use core::cell::RefCell;

use heapless::FnvIndexMap;
use log::warn;

use crate::pins::{PinId, PinMode};
use crate::ports::RawPin;

/// Maximum number of distinct pins a [`SimBoard`] tracks.
pub const SIM_MAX_PINS: usize = 64;

/// Simulated state of one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimPin {
    /// Last mode configured, `None` if never touched.
    pub mode: Option<PinMode>,
    /// Externally driven input level, `None` if the line is left to its pull.
    pub driven: Option<bool>,
    /// Level last written while the pin is an output.
    pub output_level: bool,
    /// Injected ADC code.
    pub analog_in: u16,
    /// Last DAC/PWM code written.
    pub analog_out: Option<u16>,
}

impl SimPin {
    fn level(&self) -> bool {
        match self.mode {
            Some(PinMode::Output) => self.output_level,
            Some(PinMode::InputPullUp) => self.driven.unwrap_or(true),
            _ => self.driven.unwrap_or(false),
        }
    }
}

#[derive(Default)]
pub struct SimBoard {
    pins: RefCell<FnvIndexMap<PinId, SimPin, SIM_MAX_PINS>>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive an input line from outside the chip.
    pub fn set_level(&self, pin: PinId, high: bool) {
        self.update(pin, |p| p.driven = Some(high));
    }

    /// Stop driving an input line; it falls back to its pull level.
    pub fn release_level(&self, pin: PinId) {
        self.update(pin, |p| p.driven = None);
    }

    /// Inject the code the next analog read returns.
    pub fn set_analog(&self, pin: PinId, code: u16) {
        self.update(pin, |p| p.analog_in = code);
    }

    /// Electrical level as the chip would read it.
    pub fn level(&self, pin: PinId) -> bool {
        self.snapshot(pin).level()
    }

    pub fn mode(&self, pin: PinId) -> Option<PinMode> {
        self.snapshot(pin).mode
    }

    pub fn analog_output(&self, pin: PinId) -> Option<u16> {
        self.snapshot(pin).analog_out
    }

    pub fn snapshot(&self, pin: PinId) -> SimPin {
        self.pins.borrow().get(&pin).copied().unwrap_or_default()
    }

    fn update<R>(&self, pin: PinId, f: impl FnOnce(&mut SimPin) -> R) -> R {
        let mut pins = self.pins.borrow_mut();
        if let Some(state) = pins.get_mut(&pin) {
            return f(state);
        }

        let mut state = SimPin::default();
        let out = f(&mut state);
        if pins.insert(pin, state).is_err() {
            warn!("sim: pin table full, dropping state for {}", pin);
        }
        out
    }
}

impl RawPin for SimBoard {
    fn configure_mode(&self, pin: PinId, mode: PinMode) {
        self.update(pin, |p| p.mode = Some(mode));
    }

    fn read_digital(&self, pin: PinId) -> bool {
        self.level(pin)
    }

    fn write_digital(&self, pin: PinId, high: bool) {
        self.update(pin, |p| p.output_level = high);
    }

    fn read_analog(&self, pin: PinId) -> u16 {
        self.snapshot(pin).analog_in
    }

    fn write_analog(&self, pin: PinId, code: u16) {
        self.update(pin, |p| p.analog_out = Some(code));
    }
}
