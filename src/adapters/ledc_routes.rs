//! LEDC channel bookkeeping for the ESP-IDF adapter.
//!
//! `gpio_config` hands a pin back to the GPIO matrix and detaches any LEDC
//! channel routed to it. The adapter therefore tracks, per pin, which
//! channel is bound and whether that channel still reaches the pin. No
//! ESP-IDF calls live here, so the rules build and test on the host.
//!
//! ```text
//!   configure_mode(Output) ──▶ routed?  yes ──▶ leave the pin alone
//!                                       no  ──▶ gpio_config
//!   configure_mode(input)  ──▶ gpio_config, route marked stale
//!   write_analog           ──▶ stale/new ──▶ ledc_channel_config, then duty
//! ```

use heapless::FnvIndexMap;

use crate::config::ConverterConfig;
use crate::pins::{PinId, PinMode};

/// LEDC channels available in low-speed mode.
pub const LEDC_CHANNELS: usize = 8;

/// Duty resolution of the shared LEDC timer.
pub const LEDC_DUTY_BITS: u8 = 8;

/// Largest duty the timer accepts.
pub const LEDC_MAX_DUTY: u16 = (1 << LEDC_DUTY_BITS) - 1;

/// Converter parameters matching LEDC-backed analog writes.
pub const LEDC_CONVERTER: ConverterConfig = ConverterConfig::new(3.3, LEDC_DUTY_BITS);

/// Outcome of [`LedcRoutes::bind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Channel already drives the pin; write the duty directly.
    Ready(u8),
    /// Channel must be (re)attached with `ledc_channel_config` first.
    NeedsRoute(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Route {
    channel: u8,
    routed: bool,
}

#[derive(Debug, Default)]
pub struct LedcRoutes {
    routes: FnvIndexMap<PinId, Route, LEDC_CHANNELS>,
}

impl LedcRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel for `pin`, allocating the next free one on first use.
    /// `None` once every channel is taken.
    pub fn bind(&mut self, pin: PinId) -> Option<Binding> {
        if let Some(route) = self.routes.get(&pin) {
            return Some(if route.routed {
                Binding::Ready(route.channel)
            } else {
                Binding::NeedsRoute(route.channel)
            });
        }

        let channel = self.routes.len() as u8;
        self.routes
            .insert(
                pin,
                Route {
                    channel,
                    routed: false,
                },
            )
            .ok()?;
        Some(Binding::NeedsRoute(channel))
    }

    /// Record that `ledc_channel_config` attached the channel to `pin`.
    pub fn mark_routed(&mut self, pin: PinId) {
        if let Some(route) = self.routes.get_mut(&pin) {
            route.routed = true;
        }
    }

    /// Decide whether `configure_mode(pin, mode)` may run `gpio_config`.
    ///
    /// An output request on a routed pin is already satisfied by LEDC and
    /// returns `false`. Any other request returns `true`; if the pin had a
    /// route, it is marked stale because `gpio_config` detaches it.
    pub fn claim_gpio(&mut self, pin: PinId, mode: PinMode) -> bool {
        match self.routes.get_mut(&pin) {
            Some(route) if route.routed && mode == PinMode::Output => false,
            Some(route) => {
                route.routed = false;
                true
            }
            None => true,
        }
    }

    pub fn is_routed(&self, pin: PinId) -> bool {
        self.routes.get(&pin).is_some_and(|r| r.routed)
    }
}

/// `gpio_config` bit mask for `pin`; `None` when the number does not fit.
pub fn gpio_mask(pin: PinId) -> Option<u64> {
    1u64.checked_shl(u32::from(pin.get()))
}

/// Clamp a raw analog code to what the LEDC timer can express.
pub fn ledc_duty(code: u16) -> u32 {
    u32::from(code.min(LEDC_MAX_DUTY))
}
