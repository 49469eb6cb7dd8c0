//! 8-bit PWM output.
//!
//! Duty is written through the raw analog primitive, which the platform
//! routes to its PWM peripheral.

use crate::config::PWM_MAX_CODE;
use crate::error::{Error, Result};
use crate::pins::{PinId, PinMode};
use crate::ports::RawPin;
use crate::scale;

pub struct PwmOutput<P> {
    raw: P,
    pin: Option<PinId>,
    duty: u8,
}

impl<P: RawPin> PwmOutput<P> {
    /// Inert instance with no pin.
    pub fn unassigned(raw: P) -> Self {
        Self {
            raw,
            pin: None,
            duty: 0,
        }
    }

    pub fn new(raw: P, pin: PinId) -> Result<Self> {
        let mut output = Self::unassigned(raw);
        output.set_pin(pin)?;
        Ok(output)
    }

    pub fn pin(&self) -> Option<PinId> {
        self.pin
    }

    pub fn set_pin(&mut self, pin: PinId) -> Result<()> {
        self.pin = Some(pin);
        self.raw.configure_mode(pin, PinMode::Output);
        Ok(())
    }

    fn assigned_pin(&self) -> Result<PinId> {
        self.pin.ok_or(Error::PinNotAssigned)
    }

    /// Write a raw duty code (0 = off, 255 = fully on).
    pub fn output_raw(&mut self, code: u8) -> Result<()> {
        let pin = self.assigned_pin()?;
        self.raw.configure_mode(pin, PinMode::Output);
        self.raw.write_analog(pin, u16::from(code));
        self.duty = code;
        Ok(())
    }

    /// Write a duty cycle in percent; values outside 0–100 clamp.
    pub fn output_duty_cycle(&mut self, percent: i32) -> Result<()> {
        self.output_raw(scale::duty_percent_to_code(percent))
    }

    /// Last duty code written.
    pub fn current_duty(&self) -> u8 {
        self.duty
    }

    pub const fn max_duty(&self) -> u8 {
        PWM_MAX_CODE
    }
}
