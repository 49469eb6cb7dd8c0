//! Integration tests: analog input, DAC output and PWM output.

use ioscan::config::ConverterConfig;
use ioscan::{AnalogInput, AnalogOutput, PinId, PinMode, PwmOutput, ScaleRange};

use super::recording_pins::{PinCall, RecordingPins};

const SENSOR: PinId = PinId::new(5);
const DAC_PIN: PinId = PinId::new(25);
const PWM_PIN: PinId = PinId::new(12);
const ADC_12: ConverterConfig = ConverterConfig::new(3.3, 12);

#[test]
fn humidity_range_reading() {
    let pins = RecordingPins::new();
    let sensor =
        AnalogInput::with_range(&pins, SENSOR, ADC_12, ScaleRange::new(0.0, 100.0)).unwrap();

    pins.board.set_analog(SENSOR, 2048);
    let pct = sensor.read_range().unwrap();
    assert!((pct - 50.0).abs() < 0.1, "got {pct}");
}

#[test]
fn raw_and_voltage_ignore_range() {
    let pins = RecordingPins::new();
    let mut sensor = AnalogInput::new(&pins, SENSOR, ADC_12).unwrap();
    pins.board.set_analog(SENSOR, 1000);

    let raw = sensor.read_raw().unwrap();
    let volts = sensor.read_voltage().unwrap();
    sensor.set_range(-40.0, 125.0);
    assert_eq!(sensor.read_raw().unwrap(), raw);
    assert!((sensor.read_voltage().unwrap() - volts).abs() < f32::EPSILON);
}

#[test]
fn range_setters_do_not_touch_hardware() {
    let pins = RecordingPins::new();
    let mut sensor = AnalogInput::new(&pins, SENSOR, ADC_12).unwrap();
    pins.clear();

    sensor.set_range(0.0, 10.0);
    sensor.set_range_low(1.0);
    sensor.set_range_high(2.0);
    assert!(pins.calls().is_empty());
    assert_eq!(sensor.range(), ScaleRange::new(1.0, 2.0));
}

#[test]
fn other_resolution_and_reference() {
    let pins = RecordingPins::new();
    let adc_10 = ConverterConfig::new(5.0, 10);
    let sensor = AnalogInput::new(&pins, SENSOR, adc_10).unwrap();

    pins.board.set_analog(SENSOR, 1023);
    assert!((sensor.read_voltage().unwrap() - 5.0).abs() < 1e-4);
}

#[test]
fn dac_write_reasserts_output_mode() {
    let pins = RecordingPins::new();
    let mut dac = AnalogOutput::new(&pins, DAC_PIN, ADC_12).unwrap();
    pins.clear();

    dac.output_voltage(10.0).unwrap();
    assert_eq!(
        pins.calls(),
        vec![
            PinCall::Configure(DAC_PIN, PinMode::Output),
            PinCall::WriteAnalog(DAC_PIN, 4095),
        ]
    );
}

#[test]
fn dac_never_exceeds_full_scale() {
    let pins = RecordingPins::new();
    let mut dac = AnalogOutput::new(&pins, DAC_PIN, ADC_12).unwrap();

    for volts in [0.0, 1.0, 3.29, 3.3, 6.6, 1.0e9, f32::INFINITY] {
        dac.output_voltage(volts).unwrap();
        let code = pins.board.analog_output(DAC_PIN).unwrap();
        assert!(code <= 4095, "{volts} V wrote {code}");
    }
}

#[test]
fn pwm_duty_sequence() {
    let pins = RecordingPins::new();
    let mut pwm = PwmOutput::new(&pins, PWM_PIN).unwrap();
    pins.clear();

    for pct in [0, 25, 100, 120] {
        pwm.output_duty_cycle(pct).unwrap();
    }
    assert_eq!(
        pins.writes(),
        vec![
            PinCall::WriteAnalog(PWM_PIN, 0),
            PinCall::WriteAnalog(PWM_PIN, 63),
            PinCall::WriteAnalog(PWM_PIN, 255),
            PinCall::WriteAnalog(PWM_PIN, 255),
        ]
    );
}
