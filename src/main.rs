//! Moisture alarm firmware — device entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  main loop (1 ms tick)                       │
//! │    MoistureAlarm::poll(now_ms)               │
//! │      ├─ ScanTimer gates quiet-button scans   │
//! │      └─ moisture voltage drives the buzzer   │
//! │  ───────────── RawPin boundary ───────────── │
//! │  EspRawPins (GPIO · ADC1 · LEDC)             │
//! └──────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_svc::hal::delay::FreeRtos;
use ioscan::adapters::esp_pins::{EspRawPins, LEDC_CONVERTER};
use ioscan::app::{AlarmState, MoistureAlarm};
use ioscan::config::BoardConfig;

const BOARD_CONFIG: &str = include_str!("../config/board.json");

fn now_ms() -> u32 {
    // SAFETY: esp_timer_get_time is a monotonic counter read.
    ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000) as u32
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ioscan moisture alarm v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let mut config = match BoardConfig::from_json(BOARD_CONFIG) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("board config rejected ({}), using defaults", e);
            BoardConfig::default()
        }
    };
    // Analog writes go through the 8-bit LEDC timer.
    if config.dac.resolution_bits != LEDC_CONVERTER.resolution_bits {
        warn!(
            "dac resolution {} bit does not match LEDC, using {} bit",
            config.dac.resolution_bits, LEDC_CONVERTER.resolution_bits
        );
        config.dac.resolution_bits = LEDC_CONVERTER.resolution_bits;
    }

    // ── 3. Hardware ───────────────────────────────────────────
    let pins = EspRawPins::new()?;
    let mut alarm = MoistureAlarm::from_config(&pins, &config.alarm, config.adc, now_ms())?;

    info!(
        "System ready: button={} buzzer={} sensor={} threshold={:.2} V scan={} ms",
        config.alarm.quiet_button_pin,
        config.alarm.buzzer_pin,
        config.alarm.moisture_sensor_pin,
        config.alarm.threshold_volts,
        config.alarm.scan_interval_ms,
    );

    // ── 4. Polling loop ───────────────────────────────────────
    let mut last_state = AlarmState::Quiet;
    loop {
        let state = alarm.poll(now_ms())?;
        if state != last_state {
            info!("STATE | {:?} -> {:?}", last_state, state);
            last_state = state;
        }
        FreeRtos::delay_ms(1);
    }
}
