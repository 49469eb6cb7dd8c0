//! Fuzz target: `DigitalInput` scan loop on a simulated board
//!
//! Each input byte is one scan: bit 0 is the electrical level, bit 1 toggles
//! polarity through `set_active_low` before the scan. Verifies:
//! - No panics under arbitrary sample streams
//! - Edges are one scan wide and alternate Rising/Falling between
//!   reconfigurations
//! - An edge is only reported for a logical level held across two scans
//!
//! cargo fuzz run fuzz_edge_detector

#![no_main]

use ioscan::adapters::sim::SimBoard;
use ioscan::{DigitalInput, Edge, InputConfig, PinId};
use libfuzzer_sys::fuzz_target;

const PIN: PinId = PinId::new(3);

fuzz_target!(|data: &[u8]| {
    let board = SimBoard::new();
    let mut input = match DigitalInput::new(&board, InputConfig::new(PIN)) {
        Ok(input) => input,
        Err(_) => return,
    };
    let mut active_low = false;
    let mut previous_level = input.scanned_level();
    let mut previous_edge: Option<Edge> = None;
    let mut last_edge: Option<Edge> = None;

    for &byte in data {
        if byte & 0b10 != 0 {
            active_low = !active_low;
            input.set_active_low(active_low).unwrap();
            previous_level = input.scanned_level();
            previous_edge = None;
            last_edge = None;
        }

        board.set_level(PIN, byte & 1 != 0);
        let edge = input.scan().unwrap();
        let level = input.scanned_level();

        if let Some(e) = edge {
            assert!(previous_edge.is_none(), "back-to-back edges");
            assert_eq!(level, previous_level, "edge on unconfirmed level");
            assert_eq!(e == Edge::Rising, level);
            assert_ne!(Some(e), last_edge, "edges must alternate");
            last_edge = Some(e);
        }
        assert_eq!(input.rising_edge(), edge == Some(Edge::Rising));
        assert_eq!(input.falling_edge(), edge == Some(Edge::Falling));

        previous_level = level;
        previous_edge = edge;
    }
});
