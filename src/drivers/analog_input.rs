//! Analog voltage input.
//!
//! Three views of one ADC sample: the raw code, volts, and an
//! application-defined engineering range (for example 0–100 % humidity).

use log::debug;

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::pins::{PinId, PinMode};
use crate::ports::RawPin;
use crate::scale;

/// Output range for [`AnalogInput::read_range`]. Code 0 maps to `lo`,
/// full scale maps to `hi`. The default `0..0` range maps everything to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleRange {
    pub lo: f32,
    pub hi: f32,
}

impl ScaleRange {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }
}

pub struct AnalogInput<P> {
    raw: P,
    pin: Option<PinId>,
    adc: ConverterConfig,
    range: ScaleRange,
}

impl<P: RawPin> AnalogInput<P> {
    /// Inert instance with no pin.
    pub fn unassigned(raw: P, adc: ConverterConfig) -> Self {
        Self {
            raw,
            pin: None,
            adc,
            range: ScaleRange::default(),
        }
    }

    /// Input on `pin`, configured immediately.
    pub fn new(raw: P, pin: PinId, adc: ConverterConfig) -> Result<Self> {
        let mut input = Self::unassigned(raw, adc);
        input.set_pin(pin)?;
        Ok(input)
    }

    /// Input on `pin` with an engineering range.
    pub fn with_range(raw: P, pin: PinId, adc: ConverterConfig, range: ScaleRange) -> Result<Self> {
        let mut input = Self::new(raw, pin, adc)?;
        input.range = range;
        Ok(input)
    }

    pub fn pin(&self) -> Option<PinId> {
        self.pin
    }

    pub fn converter(&self) -> ConverterConfig {
        self.adc
    }

    pub fn range(&self) -> ScaleRange {
        self.range
    }

    pub fn set_pin(&mut self, pin: PinId) -> Result<()> {
        self.pin = Some(pin);
        self.initialize()
    }

    // Range setters only affect the arithmetic; the pin is left alone.

    pub fn set_range(&mut self, lo: f32, hi: f32) {
        self.range = ScaleRange::new(lo, hi);
    }

    pub fn set_range_low(&mut self, lo: f32) {
        self.range.lo = lo;
    }

    pub fn set_range_high(&mut self, hi: f32) {
        self.range.hi = hi;
    }

    fn assigned_pin(&self) -> Result<PinId> {
        self.pin.ok_or(Error::PinNotAssigned)
    }

    fn initialize(&mut self) -> Result<()> {
        let pin = self.assigned_pin()?;
        self.raw.configure_mode(pin, PinMode::Input);
        debug!(
            "analog input {}: initialized ({} bit, {} V)",
            pin, self.adc.resolution_bits, self.adc.reference_voltage
        );
        Ok(())
    }

    /// Raw ADC code, unscaled.
    pub fn read_raw(&self) -> Result<u16> {
        let pin = self.assigned_pin()?;
        Ok(self.raw.read_analog(pin))
    }

    /// Sample converted to volts.
    pub fn read_voltage(&self) -> Result<f32> {
        Ok(scale::code_to_voltage(self.read_raw()?, &self.adc))
    }

    /// Sample mapped linearly onto the configured [`ScaleRange`].
    pub fn read_range(&self) -> Result<f32> {
        let code = self.read_raw()?;
        Ok(scale::map_range(
            f32::from(code),
            0.0,
            f32::from(self.adc.full_scale_code()),
            self.range.lo,
            self.range.hi,
        ))
    }
}
