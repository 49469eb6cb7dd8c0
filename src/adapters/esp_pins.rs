//! ESP-IDF raw pin adapter (ESP32-S3).
//!
//! - Digital I/O via `gpio_config` / `gpio_get_level` / `gpio_set_level`.
//! - Analog reads via the ADC1 oneshot driver (GPIO1–10 → ADC1 CH0–9,
//!   12 dB attenuation, 12-bit).
//! - Analog writes via LEDC PWM. The S3 has no DAC, so `write_analog`
//!   lazily binds an LEDC channel (8-bit timer) to the pin on first use and
//!   clamps codes to the timer's range; configure the DAC converter as
//!   [`LEDC_CONVERTER`] to match.
//! - Output mode on a pin LEDC already drives is a no-op: `gpio_config`
//!   would detach the channel (see [`LedcRoutes`]).
//!
//! Every call is made from the single main-loop task.

use core::cell::RefCell;

use esp_idf_svc::sys::*;
use log::{info, warn};

use crate::adapters::ledc_routes::{Binding, LedcRoutes, gpio_mask, ledc_duty};
pub use crate::adapters::ledc_routes::LEDC_CONVERTER;
use crate::pins::{PinId, PinMode};
use crate::ports::RawPin;

const PWM_FREQ_HZ: u32 = 1_000;

/// Errors during one-shot peripheral setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EspInitError {
    AdcInitFailed(i32),
    LedcInitFailed(i32),
}

impl core::fmt::Display for EspInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::LedcInitFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
        }
    }
}

impl core::error::Error for EspInitError {}

pub struct EspRawPins {
    adc1: adc_oneshot_unit_handle_t,
    ledc: RefCell<LedcRoutes>,
}

impl EspRawPins {
    /// Bring up ADC1 and the LEDC timer. Call once from `main()`.
    pub fn new() -> Result<Self, EspInitError> {
        let mut adc1: adc_oneshot_unit_handle_t = core::ptr::null_mut();
        let init_cfg = adc_oneshot_unit_init_cfg_t {
            unit_id: adc_unit_t_ADC_UNIT_1,
            ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
            ..Default::default()
        };
        // SAFETY: adc1 is a valid out-pointer; called once at boot.
        let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut adc1) };
        if ret != ESP_OK as i32 {
            return Err(EspInitError::AdcInitFailed(ret));
        }

        let timer = ledc_timer_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            timer_num: ledc_timer_t_LEDC_TIMER_0,
            duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
            freq_hz: PWM_FREQ_HZ,
            clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
            ..Default::default()
        };
        // SAFETY: plain config struct; single-threaded init path.
        let ret = unsafe { ledc_timer_config(&timer) };
        if ret != ESP_OK as i32 {
            return Err(EspInitError::LedcInitFailed(ret));
        }

        info!("esp_pins: ADC1 + LEDC timer0 ready");
        Ok(Self {
            adc1,
            ledc: RefCell::new(LedcRoutes::new()),
        })
    }

    fn gpio(pin: PinId) -> i32 {
        i32::from(pin.get())
    }

    fn adc_channel(pin: PinId) -> Option<adc_channel_t> {
        match pin.get() {
            n @ 1..=10 => Some(adc_channel_t::from(n - 1)),
            _ => None,
        }
    }

    /// LEDC channel driving `pin`, (re)attaching it when `gpio_config`
    /// has taken the pin back since the last write.
    fn ledc_channel(&self, pin: PinId) -> Option<ledc_channel_t> {
        let mut routes = self.ledc.borrow_mut();
        let Some(binding) = routes.bind(pin) else {
            warn!("esp_pins: no free LEDC channel for {}", pin);
            return None;
        };

        let index = match binding {
            Binding::Ready(index) => {
                return Some(ledc_channel_t_LEDC_CHANNEL_0 + ledc_channel_t::from(index));
            }
            Binding::NeedsRoute(index) => index,
        };
        let channel = ledc_channel_t_LEDC_CHANNEL_0 + ledc_channel_t::from(index);

        let cfg = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: Self::gpio(pin),
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        // SAFETY: timer0 was configured in new(); main-loop only.
        let ret = unsafe { ledc_channel_config(&cfg) };
        if ret != ESP_OK as i32 {
            warn!("esp_pins: LEDC channel config failed for {} (rc={})", pin, ret);
            return None;
        }
        routes.mark_routed(pin);
        Some(channel)
    }
}

impl RawPin for EspRawPins {
    fn configure_mode(&self, pin: PinId, mode: PinMode) {
        if !self.ledc.borrow_mut().claim_gpio(pin, mode) {
            return;
        }
        let Some(pin_bit_mask) = gpio_mask(pin) else {
            warn!("esp_pins: {} is out of range for gpio_config", pin);
            return;
        };

        let (gpio_mode, pull_up, pull_down) = match mode {
            PinMode::Input => (gpio_mode_t_GPIO_MODE_INPUT, false, false),
            PinMode::InputPullUp => (gpio_mode_t_GPIO_MODE_INPUT, true, false),
            PinMode::InputPullDown => (gpio_mode_t_GPIO_MODE_INPUT, false, true),
            // Input enabled too so the level can be read back for toggling.
            PinMode::Output => (gpio_mode_t_GPIO_MODE_INPUT_OUTPUT, false, false),
        };
        let cfg = gpio_config_t {
            pin_bit_mask,
            mode: gpio_mode,
            pull_up_en: if pull_up {
                gpio_pullup_t_GPIO_PULLUP_ENABLE
            } else {
                gpio_pullup_t_GPIO_PULLUP_DISABLE
            },
            pull_down_en: if pull_down {
                gpio_pulldown_t_GPIO_PULLDOWN_ENABLE
            } else {
                gpio_pulldown_t_GPIO_PULLDOWN_DISABLE
            },
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: gpio_config only touches the pin named in the mask.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            warn!("esp_pins: gpio_config failed for {} (rc={})", pin, ret);
            return;
        }

        if mode == PinMode::Input {
            if let Some(channel) = Self::adc_channel(pin) {
                let chan_cfg = adc_oneshot_chan_cfg_t {
                    atten: adc_atten_t_ADC_ATTEN_DB_12,
                    bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
                };
                // SAFETY: adc1 handle is live for the lifetime of self.
                let ret = unsafe { adc_oneshot_config_channel(self.adc1, channel, &chan_cfg) };
                if ret != ESP_OK as i32 {
                    warn!("esp_pins: ADC channel config failed for {} (rc={})", pin, ret);
                }
            }
        }
    }

    fn read_digital(&self, pin: PinId) -> bool {
        // SAFETY: read-only register access.
        (unsafe { gpio_get_level(Self::gpio(pin)) }) != 0
    }

    fn write_digital(&self, pin: PinId, high: bool) {
        // SAFETY: main-loop only; pin configured by configure_mode.
        unsafe {
            gpio_set_level(Self::gpio(pin), u32::from(high));
        }
    }

    fn read_analog(&self, pin: PinId) -> u16 {
        let Some(channel) = Self::adc_channel(pin) else {
            warn!("esp_pins: {} is not an ADC1 pin", pin);
            return 0;
        };
        let mut raw: i32 = 0;
        // SAFETY: adc1 handle is live; raw is a valid out-pointer.
        let ret = unsafe { adc_oneshot_read(self.adc1, channel, &mut raw) };
        if ret != ESP_OK as i32 {
            return 0;
        }
        raw.max(0) as u16
    }

    fn write_analog(&self, pin: PinId, code: u16) {
        let Some(channel) = self.ledc_channel(pin) else {
            return;
        };
        let duty = ledc_duty(code);
        if duty != u32::from(code) {
            warn!("esp_pins: code {} exceeds LEDC range on {}, clamped to {}", code, pin, duty);
        }
        // SAFETY: channel bound to timer0; duty writes are main-loop only.
        unsafe {
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty);
            ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
        }
    }
}
