//! Polarity-aware digital input with scan-debounced edge flags.
//!
//! ## Scan protocol
//!
//! The owning loop calls [`DigitalInput::scan`] at a fixed cadence and reads
//! [`rising_edge`](DigitalInput::rising_edge) /
//! [`falling_edge`](DigitalInput::falling_edge) before the next scan. Each
//! flag is true for exactly one scan. See [`crate::edge`] for the debounce
//! rules.
//!
//! ## Configuration
//!
//! Pin, mode and polarity form one [`InputConfig`] value. Any change goes
//! through [`DigitalInput::reconfigure`], which reconfigures the pin and
//! reseeds the edge history from the current level so a config change can
//! never produce a spurious edge.

use log::{debug, trace};

use crate::edge::{DetectorPhase, Edge, EdgeDetector};
use crate::error::{Error, Result};
use crate::pins::{PinId, PinMode, Polarity};
use crate::ports::RawPin;

/// Immutable input configuration; replace it wholesale to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputConfig {
    pub pin: Option<PinId>,
    pub mode: PinMode,
    pub polarity: Polarity,
}

impl InputConfig {
    /// Floating, active-high input on `pin`.
    pub const fn new(pin: PinId) -> Self {
        Self {
            pin: Some(pin),
            mode: PinMode::Input,
            polarity: Polarity::ActiveHigh,
        }
    }

    pub const fn with_pin(self, pin: PinId) -> Self {
        Self {
            pin: Some(pin),
            ..self
        }
    }

    pub const fn with_mode(self, mode: PinMode) -> Self {
        Self { mode, ..self }
    }

    pub const fn with_polarity(self, polarity: Polarity) -> Self {
        Self { polarity, ..self }
    }

    pub const fn active_low(self) -> Self {
        self.with_polarity(Polarity::ActiveLow)
    }
}

pub struct DigitalInput<P> {
    raw: P,
    config: InputConfig,
    detector: EdgeDetector,
    edge: Option<Edge>,
}

impl<P: RawPin> DigitalInput<P> {
    /// Inert instance with no pin. Reads fail with
    /// [`Error::PinNotAssigned`] until a pin is assigned.
    pub fn unassigned(raw: P) -> Self {
        Self {
            raw,
            config: InputConfig::default(),
            detector: EdgeDetector::default(),
            edge: None,
        }
    }

    /// Build and, if the config names a pin, initialize immediately.
    pub fn new(raw: P, config: InputConfig) -> Result<Self> {
        let mut input = Self::unassigned(raw);
        input.reconfigure(config)?;
        Ok(input)
    }

    pub fn config(&self) -> InputConfig {
        self.config
    }

    pub fn pin(&self) -> Option<PinId> {
        self.config.pin
    }

    /// Replace the whole configuration and re-initialize.
    pub fn reconfigure(&mut self, config: InputConfig) -> Result<()> {
        self.config = config;
        match config.pin {
            Some(_) => self.initialize(),
            None => {
                self.detector = EdgeDetector::default();
                self.edge = None;
                Ok(())
            }
        }
    }

    pub fn set_pin(&mut self, pin: PinId) -> Result<()> {
        self.reconfigure(self.config.with_pin(pin))
    }

    pub fn set_mode(&mut self, mode: PinMode) -> Result<()> {
        self.reconfigure(self.config.with_mode(mode))
    }

    pub fn set_active_low(&mut self, active_low: bool) -> Result<()> {
        self.reconfigure(
            self.config
                .with_polarity(Polarity::from_active_low(active_low)),
        )
    }

    fn assigned_pin(&self) -> Result<PinId> {
        self.config.pin.ok_or(Error::PinNotAssigned)
    }

    fn initialize(&mut self) -> Result<()> {
        let pin = self.assigned_pin()?;
        self.raw.configure_mode(pin, self.config.mode);

        let level = self.state()?;
        self.detector = EdgeDetector::new(level);
        self.edge = None;

        debug!(
            "input {}: initialized ({:?}, {:?}) level={}",
            pin, self.config.mode, self.config.polarity, level
        );
        Ok(())
    }

    /// Current logical level, read straight from the pin. No history update.
    pub fn state(&self) -> Result<bool> {
        let pin = self.assigned_pin()?;
        Ok(self.config.polarity.to_logical(self.raw.read_digital(pin)))
    }

    /// Sample the pin once and advance the edge detector.
    ///
    /// Returns the edge confirmed by this scan; the same value is available
    /// from the flag accessors until the next scan.
    pub fn scan(&mut self) -> Result<Option<Edge>> {
        let level = self.state()?;
        let edge = self.detector.update(level);
        self.edge = edge;

        if let Some(edge) = edge {
            trace!("input {}: {:?} edge", self.assigned_pin()?, edge);
        }
        Ok(edge)
    }

    /// True for exactly one scan after a low→high transition is confirmed.
    pub fn rising_edge(&self) -> bool {
        self.edge == Some(Edge::Rising)
    }

    /// True for exactly one scan after a high→low transition is confirmed.
    pub fn falling_edge(&self) -> bool {
        self.edge == Some(Edge::Falling)
    }

    /// Edge reported by the most recent scan.
    pub fn last_edge(&self) -> Option<Edge> {
        self.edge
    }

    /// Level sampled by the most recent scan (or at initialization).
    pub fn scanned_level(&self) -> bool {
        self.detector.level()
    }

    pub fn phase(&self) -> DetectorPhase {
        self.detector.phase()
    }

    /// Give back the raw pin adapter.
    pub fn release(self) -> P {
        self.raw
    }
}
