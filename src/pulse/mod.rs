pub mod overflow_extender;
pub mod pulse_accumulator;
