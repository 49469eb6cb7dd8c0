//! Application layer — code that drives the I/O wrappers from a polling
//! loop. The wrappers themselves never decide *when* to scan; this does.

pub mod moisture_alarm;
pub mod scan_timer;

pub use moisture_alarm::{AlarmState, MoistureAlarm};
pub use scan_timer::ScanTimer;
