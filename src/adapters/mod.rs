//! Concrete [`RawPin`](crate::ports::RawPin) adapters.
//!
//! - [`sim::SimBoard`] — in-memory board for host tests and simulation.
//! - `esp_pins::EspRawPins` — ESP-IDF GPIO/ADC/LEDC backend, only built for
//!   `target_os = "espidf"`.
//! - [`ledc_routes`] — platform-free LEDC channel bookkeeping used by
//!   `esp_pins`.

pub mod ledc_routes;
pub mod sim;

#[cfg(target_os = "espidf")]
pub mod esp_pins;
