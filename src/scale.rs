//! Linear conversions between converter codes and engineering units.

use crate::config::{ConverterConfig, PWM_MAX_CODE};

/// Linear interpolation of `x` from `[in_min, in_max]` onto
/// `[out_min, out_max]`. Not clamped. A zero-width (or sub-epsilon) input
/// span yields `out_min`.
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() < f32::EPSILON {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / span + out_min
}

/// ADC code → volts. Full scale maps to the reference voltage.
pub fn code_to_voltage(code: u16, adc: &ConverterConfig) -> f32 {
    f32::from(code) * (adc.reference_voltage / f32::from(adc.full_scale_code()))
}

/// Volts → DAC code, clamped to `[0, full_scale_code]`.
///
/// Scales by the code count (so `reference_voltage` itself lands one past
/// the last code and clamps onto it). NaN maps to 0.
pub fn voltage_to_code(volts: f32, dac: &ConverterConfig) -> u16 {
    let scaled = (volts / dac.reference_voltage) * dac.code_count() as f32;
    let max = f32::from(dac.full_scale_code());
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, max) as u16
}

/// Duty cycle percentage → 8-bit PWM code, clamped to `[0, 255]`.
pub fn duty_percent_to_code(percent: i32) -> u8 {
    let scaled = i64::from(percent) * i64::from(PWM_MAX_CODE) / 100;
    scaled.clamp(0, i64::from(PWM_MAX_CODE)) as u8
}
