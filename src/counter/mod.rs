pub mod hardware_counter;
pub mod prescaler;
