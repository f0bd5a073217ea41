pub mod burst;
pub mod pulse_source;
pub mod pulse_train;
