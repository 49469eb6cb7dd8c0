//! Integration tests: DigitalInput / DigitalOutput against simulated pins.

use ioscan::adapters::sim::SimBoard;
use ioscan::{DigitalInput, DigitalOutput, Edge, Error, InputConfig, OutputConfig, PinId, PinMode};

use super::recording_pins::{PinCall, RecordingPins};

const BUTTON: PinId = PinId::new(3);
const LAMP: PinId = PinId::new(4);

/// Feed `samples[0]` to initialization and the rest one per scan.
/// Returns `(rising, falling)` flags observed after each scan.
fn drive(samples: &[u8]) -> Vec<(bool, bool)> {
    let board = SimBoard::new();
    board.set_level(BUTTON, samples[0] != 0);
    let mut input = DigitalInput::new(&board, InputConfig::new(BUTTON)).unwrap();

    samples[1..]
        .iter()
        .map(|&s| {
            board.set_level(BUTTON, s != 0);
            input.scan().unwrap();
            (input.rising_edge(), input.falling_edge())
        })
        .collect()
}

#[test]
fn reference_sequence_fires_each_edge_once() {
    let flags = drive(&[0, 0, 0, 1, 1, 1, 1, 0, 0]);
    assert_eq!(flags.len(), 8);

    let rising: Vec<usize> = (0..flags.len()).filter(|&i| flags[i].0).collect();
    let falling: Vec<usize> = (0..flags.len()).filter(|&i| flags[i].1).collect();

    // Scan numbers are 1-based: the 4th scan sees the second high sample.
    assert_eq!(rising, vec![3]);
    assert_eq!(falling, vec![7]);
}

#[test]
fn bouncing_contact_reports_single_press() {
    // Contact chatter on press and on release, then stable.
    let flags = drive(&[0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0]);
    let rising = flags.iter().filter(|f| f.0).count();
    let falling = flags.iter().filter(|f| f.1).count();
    assert_eq!(rising, 1);
    assert_eq!(falling, 1);
}

#[test]
fn active_low_button_with_pull_up() {
    let board = SimBoard::new();
    let mut button = DigitalInput::new(
        &board,
        InputConfig::new(BUTTON)
            .with_mode(PinMode::InputPullUp)
            .active_low(),
    )
    .unwrap();

    // Released: pull-up holds the line high, logical inactive.
    assert!(!button.state().unwrap());

    board.set_level(BUTTON, false);
    assert_eq!(button.scan().unwrap(), None);
    assert_eq!(button.scan().unwrap(), Some(Edge::Rising));

    board.release_level(BUTTON);
    assert_eq!(button.scan().unwrap(), None);
    assert_eq!(button.scan().unwrap(), Some(Edge::Falling));
}

#[test]
fn init_configures_before_sampling() {
    let pins = RecordingPins::new();
    let _input = DigitalInput::new(
        &pins,
        InputConfig::new(BUTTON).with_mode(PinMode::InputPullDown),
    )
    .unwrap();

    assert_eq!(
        pins.calls(),
        vec![
            PinCall::Configure(BUTTON, PinMode::InputPullDown),
            PinCall::ReadDigital(BUTTON),
        ]
    );
}

#[test]
fn scan_reads_once_and_never_writes() {
    let pins = RecordingPins::new();
    let mut input = DigitalInput::new(&pins, InputConfig::new(BUTTON)).unwrap();
    pins.clear();

    for _ in 0..5 {
        input.scan().unwrap();
    }
    assert_eq!(pins.calls(), vec![PinCall::ReadDigital(BUTTON); 5]);
}

#[test]
fn every_setter_reinitializes() {
    let pins = RecordingPins::new();
    let mut input = DigitalInput::new(&pins, InputConfig::new(BUTTON)).unwrap();

    pins.clear();
    input.set_mode(PinMode::InputPullUp).unwrap();
    assert_eq!(pins.calls()[0], PinCall::Configure(BUTTON, PinMode::InputPullUp));

    pins.clear();
    input.set_active_low(true).unwrap();
    assert_eq!(pins.calls()[0], PinCall::Configure(BUTTON, PinMode::InputPullUp));

    let moved = PinId::new(11);
    pins.clear();
    input.set_pin(moved).unwrap();
    assert_eq!(
        pins.calls(),
        vec![
            PinCall::Configure(moved, PinMode::InputPullUp),
            PinCall::ReadDigital(moved),
        ]
    );
}

#[test]
fn unassigned_wrappers_never_touch_pin_zero() {
    let pins = RecordingPins::new();
    let mut input = DigitalInput::unassigned(&pins);
    let mut output = DigitalOutput::unassigned(&pins);

    assert_eq!(input.scan(), Err(Error::PinNotAssigned));
    assert_eq!(output.on(), Err(Error::PinNotAssigned));
    assert_eq!(output.toggle(), Err(Error::PinNotAssigned));
    assert!(!pins.touched(PinId::new(0)));
    assert!(pins.calls().is_empty());
}

#[test]
fn output_init_sequence() {
    let pins = RecordingPins::new();
    let _lamp = DigitalOutput::new(&pins, OutputConfig::new(LAMP).active_low()).unwrap();
    assert_eq!(
        pins.calls(),
        vec![
            PinCall::Configure(LAMP, PinMode::Output),
            PinCall::WriteDigital(LAMP, true),
        ]
    );
}

#[test]
fn output_state_dispatch() {
    let pins = RecordingPins::new();
    let mut lamp = DigitalOutput::new(&pins, OutputConfig::new(LAMP)).unwrap();
    pins.clear();

    lamp.set_state(true).unwrap();
    lamp.set_state(true).unwrap();
    lamp.set_state(false).unwrap();
    assert_eq!(
        pins.writes(),
        vec![
            PinCall::WriteDigital(LAMP, true),
            PinCall::WriteDigital(LAMP, true),
            PinCall::WriteDigital(LAMP, false),
        ]
    );
}

#[test]
fn toggle_reads_then_writes_complement() {
    let pins = RecordingPins::new();
    let mut lamp = DigitalOutput::new(&pins, OutputConfig::new(LAMP).active_low()).unwrap();
    pins.clear();

    lamp.toggle().unwrap();
    assert_eq!(
        pins.calls(),
        vec![
            PinCall::ReadDigital(LAMP),
            PinCall::WriteDigital(LAMP, false),
        ]
    );
    assert!(lamp.is_on().unwrap());
}
