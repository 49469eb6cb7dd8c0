//! DAC voltage output.
//!
//! Output mode is re-asserted before every write, so a pin that something
//! else reconfigured in between still ends up driving the DAC.

use log::trace;

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::pins::{PinId, PinMode};
use crate::ports::RawPin;
use crate::scale;

pub struct AnalogOutput<P> {
    raw: P,
    pin: Option<PinId>,
    dac: ConverterConfig,
}

impl<P: RawPin> AnalogOutput<P> {
    /// Inert instance with no pin.
    pub fn unassigned(raw: P, dac: ConverterConfig) -> Self {
        Self {
            raw,
            pin: None,
            dac,
        }
    }

    pub fn new(raw: P, pin: PinId, dac: ConverterConfig) -> Result<Self> {
        let mut output = Self::unassigned(raw, dac);
        output.set_pin(pin)?;
        Ok(output)
    }

    pub fn pin(&self) -> Option<PinId> {
        self.pin
    }

    pub fn converter(&self) -> ConverterConfig {
        self.dac
    }

    pub fn set_pin(&mut self, pin: PinId) -> Result<()> {
        self.pin = Some(pin);
        self.raw.configure_mode(pin, PinMode::Output);
        Ok(())
    }

    fn assigned_pin(&self) -> Result<PinId> {
        self.pin.ok_or(Error::PinNotAssigned)
    }

    /// Write a raw DAC code, clamped to full scale.
    pub fn output_raw(&mut self, code: u16) -> Result<()> {
        let pin = self.assigned_pin()?;
        let clamped = code.min(self.dac.full_scale_code());
        if clamped != code {
            trace!("analog output {}: code {} clamped to {}", pin, code, clamped);
        }
        self.raw.configure_mode(pin, PinMode::Output);
        self.raw.write_analog(pin, clamped);
        Ok(())
    }

    /// Write a voltage; out-of-range requests clamp to `[0, full_scale]`.
    pub fn output_voltage(&mut self, volts: f32) -> Result<()> {
        let code = scale::voltage_to_code(volts, &self.dac);
        self.output_raw(code)
    }
}
