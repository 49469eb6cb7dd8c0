//! ioscan — pin wrappers for polled firmware loops.
//!
//! Typed wrappers around digital and analog pins that normalise polarity and
//! turn polled digital reads into a debounced level plus one-scan-wide
//! rising/falling edge flags.
//!
//! ```text
//!   polling loop ──▶ DigitalInput::scan() ──▶ EdgeDetector
//!                          │
//!                          ▼
//!                    RawPin adapter (SimBoard | EspRawPins | ...)
//! ```
//!
//! Hardware access goes through the [`ports::RawPin`] trait, so every
//! wrapper runs on the host against [`adapters::sim::SimBoard`]. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod edge;
pub mod error;
pub mod pins;
pub mod ports;
pub mod scale;

pub use drivers::{
    AnalogInput, AnalogOutput, DigitalInput, DigitalOutput, InputConfig, OutputConfig, PwmOutput,
    ScaleRange,
};
pub use edge::{Edge, EdgeDetector};
pub use error::{Error, Result};
pub use pins::{PinId, PinMode, Polarity};
pub use ports::RawPin;
