use log::info;

use crate::display::display::Display;
use crate::session::{Frequency, MeasurementSession};

pub const READOUT_LINE: usize = 0;

// The cooperative side of the instrument. Anything allowed to be slow
// (formatting, display traffic, the restart) happens here, never in the
// overflow handlers.
pub struct MeasurementController;

impl MeasurementController {
    // One pass of the main loop. Reports at most one frequency per completed
    // gate: the counters stay stopped until start_cycle() runs, so nothing
    // accrues between the flag being set and this poll.
    pub fn poll(session: &mut MeasurementSession, display: &mut dyn Display) -> Option<Frequency> {
        if !session.take_data_ready() {
            return None;
        }

        let frequency = session.frequency();
        info!(target: "measurements", "Measured {frequency} Hz.");

        display.clear_line(READOUT_LINE);
        display.write_str(&frequency.to_string());

        session.start_cycle();
        Some(frequency)
    }
}
