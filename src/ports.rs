//! Port trait — the boundary between the pin wrappers and the hardware.
//!
//! ```text
//!   RawPin adapter ──▶ RawPin trait ──▶ DigitalInput / DigitalOutput / Analog*
//! ```
//!
//! Hardware registers are global, so every method takes `&self`: several
//! wrappers can share one adapter (usually through `&Adapter`). Adapters are
//! expected to be `!Sync`; a single polling loop owns every instance.
//!
//! All primitives are infallible. Platform faults (invalid pin numbers,
//! converter errors) are the adapter's to log or swallow.

use crate::pins::{PinId, PinMode};

/// Raw, polarity-unaware pin primitives keyed by pin identifier.
pub trait RawPin {
    /// Configure the electrical mode of `pin`. Idempotent.
    fn configure_mode(&self, pin: PinId, mode: PinMode);

    /// Instantaneous electrical level (`true` = high).
    fn read_digital(&self, pin: PinId) -> bool;

    /// Drive the electrical level; observable on the next read.
    fn write_digital(&self, pin: PinId, high: bool);

    /// Raw converter code in `[0, full_scale_code]`.
    fn read_analog(&self, pin: PinId) -> u16;

    /// Raw converter code. Callers clamp to `[0, full_scale_code]` first.
    fn write_analog(&self, pin: PinId, code: u16);
}

impl<T: RawPin + ?Sized> RawPin for &T {
    fn configure_mode(&self, pin: PinId, mode: PinMode) {
        (**self).configure_mode(pin, mode);
    }

    fn read_digital(&self, pin: PinId) -> bool {
        (**self).read_digital(pin)
    }

    fn write_digital(&self, pin: PinId, high: bool) {
        (**self).write_digital(pin, high);
    }

    fn read_analog(&self, pin: PinId) -> u16 {
        (**self).read_analog(pin)
    }

    fn write_analog(&self, pin: PinId, code: u16) {
        (**self).write_analog(pin, code);
    }
}
