//! Moisture alarm: the reference application for the I/O layer.
//!
//! A buzzer sounds while an analog moisture sensor reads above a threshold.
//! Pressing the quiet button silences it until the moisture drops back
//! below the threshold, which re-arms the alarm.
//!
//! ```text
//!          voltage > threshold              rising edge on quiet button
//!   Quiet ──────────────────────▶ Sounding ─────────────────────────────▶ Silenced
//!     ▲                                                                       │
//!     └───────────────────────── voltage <= threshold ◀───────────────────────┘
//! ```

use log::info;

use crate::app::scan_timer::ScanTimer;
use crate::config::{AlarmConfig, ConverterConfig};
use crate::drivers::{AnalogInput, DigitalInput, DigitalOutput, InputConfig, OutputConfig};
use crate::error::Result;
use crate::ports::RawPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    /// Moisture below threshold; buzzer off.
    Quiet,
    /// Moisture above threshold; buzzer on.
    Sounding,
    /// Moisture above threshold but the user silenced the buzzer.
    Silenced,
}

pub struct MoistureAlarm<P> {
    quiet_button: DigitalInput<P>,
    buzzer: DigitalOutput<P>,
    sensor: AnalogInput<P>,
    scan_timer: ScanTimer,
    threshold_volts: f32,
    silenced: bool,
}

impl<P: RawPin> MoistureAlarm<P> {
    pub fn new(
        quiet_button: DigitalInput<P>,
        buzzer: DigitalOutput<P>,
        sensor: AnalogInput<P>,
        scan_timer: ScanTimer,
        threshold_volts: f32,
    ) -> Self {
        Self {
            quiet_button,
            buzzer,
            sensor,
            scan_timer,
            threshold_volts,
            silenced: false,
        }
    }

    /// Wire the alarm from configuration. `raw` is cloned for each wrapper,
    /// so pass a shared reference to the adapter.
    pub fn from_config(raw: P, config: &AlarmConfig, adc: ConverterConfig, now_ms: u32) -> Result<Self>
    where
        P: Clone,
    {
        let quiet_button = DigitalInput::new(
            raw.clone(),
            InputConfig::new(config.quiet_button_pin)
                .with_mode(config.quiet_button_mode)
                .with_polarity(config.quiet_button_polarity),
        )?;
        let buzzer = DigitalOutput::new(
            raw.clone(),
            OutputConfig::new(config.buzzer_pin).with_polarity(config.buzzer_polarity),
        )?;
        let sensor = AnalogInput::new(raw, config.moisture_sensor_pin, adc)?;

        Ok(Self::new(
            quiet_button,
            buzzer,
            sensor,
            ScanTimer::new(config.scan_interval_ms, now_ms),
            config.threshold_volts,
        ))
    }

    /// One pass of the polling loop.
    ///
    /// Scans the quiet button when the scan interval has elapsed, then
    /// drives the buzzer from the current moisture reading.
    pub fn poll(&mut self, now_ms: u32) -> Result<AlarmState> {
        if self.scan_timer.due(now_ms) {
            self.quiet_button.scan()?;
            if self.quiet_button.rising_edge() && !self.silenced {
                self.silenced = true;
                info!("alarm: silenced by quiet button");
            }
        }

        if self.sensor.read_voltage()? > self.threshold_volts {
            if self.silenced {
                self.buzzer.off()?;
                Ok(AlarmState::Silenced)
            } else {
                self.buzzer.on()?;
                Ok(AlarmState::Sounding)
            }
        } else {
            if self.silenced {
                self.silenced = false;
                info!("alarm: moisture cleared, re-armed");
            }
            self.buzzer.off()?;
            Ok(AlarmState::Quiet)
        }
    }

    pub fn is_silenced(&self) -> bool {
        self.silenced
    }
}
