//! `embedded-hal` 1.0 interop.
//!
//! Lets the wrappers stand in wherever a third-party driver expects an
//! embedded-hal pin. Levels are *logical*: `is_high` on an active-low
//! [`DigitalInput`] is true when the line is pulled low.

use embedded_hal::digital::{self, InputPin, OutputPin, StatefulOutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use crate::config::PWM_MAX_CODE;
use crate::error::Error;
use crate::ports::RawPin;

use super::digital_input::DigitalInput;
use super::digital_output::DigitalOutput;
use super::pwm_output::PwmOutput;

impl<P: RawPin> digital::ErrorType for DigitalInput<P> {
    type Error = Error;
}

impl<P: RawPin> InputPin for DigitalInput<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.state()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.state().map(|active| !active)
    }
}

impl<P: RawPin> digital::ErrorType for DigitalOutput<P> {
    type Error = Error;
}

impl<P: RawPin> OutputPin for DigitalOutput<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.off()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on()
    }
}

impl<P: RawPin> StatefulOutputPin for DigitalOutput<P> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.is_on()
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_on().map(|on| !on)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        DigitalOutput::toggle(self)
    }
}

impl<P: RawPin> pwm::ErrorType for PwmOutput<P> {
    type Error = Error;
}

impl<P: RawPin> SetDutyCycle for PwmOutput<P> {
    fn max_duty_cycle(&self) -> u16 {
        u16::from(PWM_MAX_CODE)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let code = duty.min(u16::from(PWM_MAX_CODE)) as u8;
        self.output_raw(code)
    }
}
