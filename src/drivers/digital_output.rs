//! Polarity-aware digital output.
//!
//! `on()` / `off()` speak in logical levels; the configured [`Polarity`]
//! decides which electrical level that means. Initialization configures
//! the pin as an output and drives it to the inactive level.

use log::debug;

use crate::error::{Error, Result};
use crate::pins::{PinId, PinMode, Polarity};
use crate::ports::RawPin;

/// Immutable output configuration; replace it wholesale to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    pub pin: Option<PinId>,
    pub polarity: Polarity,
}

impl OutputConfig {
    /// Active-high output on `pin`.
    pub const fn new(pin: PinId) -> Self {
        Self {
            pin: Some(pin),
            polarity: Polarity::ActiveHigh,
        }
    }

    pub const fn with_pin(self, pin: PinId) -> Self {
        Self {
            pin: Some(pin),
            ..self
        }
    }

    pub const fn with_polarity(self, polarity: Polarity) -> Self {
        Self { polarity, ..self }
    }

    pub const fn active_low(self) -> Self {
        self.with_polarity(Polarity::ActiveLow)
    }
}

pub struct DigitalOutput<P> {
    raw: P,
    config: OutputConfig,
}

impl<P: RawPin> DigitalOutput<P> {
    /// Inert instance with no pin.
    pub fn unassigned(raw: P) -> Self {
        Self {
            raw,
            config: OutputConfig::default(),
        }
    }

    /// Build and, if the config names a pin, drive it to the off level.
    pub fn new(raw: P, config: OutputConfig) -> Result<Self> {
        let mut output = Self::unassigned(raw);
        output.reconfigure(config)?;
        Ok(output)
    }

    pub fn config(&self) -> OutputConfig {
        self.config
    }

    pub fn pin(&self) -> Option<PinId> {
        self.config.pin
    }

    /// Replace the whole configuration and re-initialize.
    pub fn reconfigure(&mut self, config: OutputConfig) -> Result<()> {
        self.config = config;
        if config.pin.is_some() {
            self.initialize()?;
        }
        Ok(())
    }

    pub fn set_pin(&mut self, pin: PinId) -> Result<()> {
        self.reconfigure(self.config.with_pin(pin))
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
        self.raw.configure_mode(pin, PinMode::Output);
        self.off()?;
        debug!("output {}: initialized ({:?})", pin, self.config.polarity);
        Ok(())
    }

    /// Drive the active level.
    pub fn on(&mut self) -> Result<()> {
        self.set_state(true)
    }

    /// Drive the inactive level.
    pub fn off(&mut self) -> Result<()> {
        self.set_state(false)
    }

    /// Drive a logical level.
    pub fn set_state(&mut self, active: bool) -> Result<()> {
        let pin = self.assigned_pin()?;
        self.raw
            .write_digital(pin, self.config.polarity.to_raw(active));
        Ok(())
    }

    /// Logical level currently present on the pin.
    pub fn is_on(&self) -> Result<bool> {
        let pin = self.assigned_pin()?;
        Ok(self.config.polarity.to_logical(self.raw.read_digital(pin)))
    }

    /// Invert the logical level.
    ///
    /// Polarity is a pure inversion, so the electrical level written is
    /// always the complement of the one read back, for either polarity.
    pub fn toggle(&mut self) -> Result<()> {
        let on = self.is_on()?;
        self.set_state(!on)
    }

    /// Give back the raw pin adapter.
    pub fn release(self) -> P {
        self.raw
    }
}
