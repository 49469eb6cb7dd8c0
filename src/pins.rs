//! Pin identifiers, modes and polarity.
//!
//! A [`PinId`] is an opaque platform pin number. [`Polarity`] is what turns a
//! raw electrical level into a logical one: logical `true` always means
//! "active", whatever the wiring.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(u16);

impl PinId {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Platform pin number.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for PinId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin {}", self.0)
    }
}

/// Electrical configuration requested from the raw pin layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMode {
    /// Floating input.
    #[default]
    Input,
    InputPullUp,
    InputPullDown,
    Output,
}

impl PinMode {
    pub fn is_input(self) -> bool {
        !matches!(self, Self::Output)
    }
}

/// Mapping between raw electrical level and logical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Logical active = raw high.
    #[default]
    ActiveHigh,
    /// Logical active = raw low.
    ActiveLow,
}

impl Polarity {
    pub const fn from_active_low(active_low: bool) -> Self {
        if active_low {
            Self::ActiveLow
        } else {
            Self::ActiveHigh
        }
    }

    pub const fn is_active_low(self) -> bool {
        matches!(self, Self::ActiveLow)
    }

    /// Raw electrical level → logical level.
    pub const fn to_logical(self, raw_high: bool) -> bool {
        raw_high != self.is_active_low()
    }

    /// Logical level → raw electrical level.
    ///
    /// The mapping is an involution, so this is the same XOR as
    /// [`Polarity::to_logical`].
    pub const fn to_raw(self, active: bool) -> bool {
        active != self.is_active_low()
    }
}
