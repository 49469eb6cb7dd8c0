//! Pin wrappers over a shared [`RawPin`](crate::ports::RawPin) adapter.
//!
//! Each wrapper owns its pin identifier and configuration; none references
//! another. Construct with `unassigned(..)` for an inert instance or with
//! `new(..)` for one that is initialized immediately.

pub mod analog_input;
pub mod analog_output;
pub mod digital_input;
pub mod digital_output;
pub mod hal;
pub mod pwm_output;

pub use analog_input::{AnalogInput, ScaleRange};
pub use analog_output::AnalogOutput;
pub use digital_input::{DigitalInput, InputConfig};
pub use digital_output::{DigitalOutput, OutputConfig};
pub use pwm_output::PwmOutput;
