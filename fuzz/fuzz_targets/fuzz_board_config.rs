//! Fuzz target: `BoardConfig::from_json`
//!
//! Feeds arbitrary bytes to the JSON board-configuration loader. Verifies:
//! - No panics on malformed or hostile input
//! - Any accepted configuration passes `validate()` and builds converter
//!   scaling without overflow
//!
//! cargo fuzz run fuzz_board_config

#![no_main]

use ioscan::config::BoardConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = BoardConfig::from_json(text) {
        assert!(config.validate().is_ok());
        let _ = config.adc.full_scale_code();
        let _ = config.dac.code_count();
    }
});
