//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one part of the I/O
//! layer against simulated pins. All tests run on the host with no real
//! hardware required.

mod analog_io_tests;
mod digital_io_tests;
mod moisture_alarm_tests;
mod recording_pins;
