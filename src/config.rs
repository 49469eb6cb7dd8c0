//! Board configuration
//!
//! Converter parameters (reference voltage, resolution) are configuration,
//! not constants: the same drivers run on a 3.3 V / 12-bit part and on
//! anything else. The example application's pin map lives here too.
//!
//! Loaded from JSON with `serde_json`; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins::{PinId, PinMode, Polarity};

/// PWM outputs are fixed at 8-bit resolution.
pub const PWM_MAX_CODE: u8 = u8::MAX;

/// Analog converter (ADC or DAC) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Voltage corresponding to full scale.
    pub reference_voltage: f32,
    /// Converter resolution in bits (1–16).
    pub resolution_bits: u8,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            reference_voltage: 3.3,
            resolution_bits: 12,
        }
    }
}

impl ConverterConfig {
    pub const fn new(reference_voltage: f32, resolution_bits: u8) -> Self {
        Self {
            reference_voltage,
            resolution_bits,
        }
    }

    /// Largest raw code the converter produces (4095 for 12 bits).
    pub fn full_scale_code(&self) -> u16 {
        (self.code_count() - 1) as u16
    }

    /// Number of distinct codes (4096 for 12 bits).
    pub fn code_count(&self) -> u32 {
        1u32 << self.resolution_bits.clamp(1, 16)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=16).contains(&self.resolution_bits) {
            return Err(Error::Config("converter resolution must be 1-16 bits"));
        }
        if !self.reference_voltage.is_finite() || self.reference_voltage <= 0.0 {
            return Err(Error::Config("reference voltage must be positive"));
        }
        Ok(())
    }
}

/// Pin map and thresholds for the moisture alarm application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    pub quiet_button_pin: PinId,
    pub quiet_button_mode: PinMode,
    pub quiet_button_polarity: Polarity,
    pub buzzer_pin: PinId,
    pub buzzer_polarity: Polarity,
    pub moisture_sensor_pin: PinId,
    /// Sensor voltage above which the buzzer sounds.
    pub threshold_volts: f32,
    /// Quiet-button scan cadence (milliseconds).
    pub scan_interval_ms: u32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            // Momentary switch to ground with the internal pull-up.
            quiet_button_pin: PinId::new(3),
            quiet_button_mode: PinMode::InputPullUp,
            quiet_button_polarity: Polarity::ActiveLow,
            buzzer_pin: PinId::new(4),
            buzzer_polarity: Polarity::ActiveHigh,
            moisture_sensor_pin: PinId::new(5),
            threshold_volts: 1.5,
            scan_interval_ms: 10,
        }
    }
}

impl AlarmConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scan_interval_ms == 0 {
            return Err(Error::Config("scan interval must be non-zero"));
        }
        if !self.threshold_volts.is_finite() {
            return Err(Error::Config("threshold must be finite"));
        }
        if !self.quiet_button_mode.is_input() {
            return Err(Error::Config("quiet button must use an input mode"));
        }
        let pins = [
            self.quiet_button_pin,
            self.buzzer_pin,
            self.moisture_sensor_pin,
        ];
        if pins[0] == pins[1] || pins[0] == pins[2] || pins[1] == pins[2] {
            return Err(Error::Config("alarm pins must be distinct"));
        }
        Ok(())
    }
}

/// Complete board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub adc: ConverterConfig,
    pub dac: ConverterConfig,
    pub alarm: AlarmConfig,
}

impl BoardConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.adc.validate()?;
        self.dac.validate()?;
        self.alarm.validate()
    }
}
