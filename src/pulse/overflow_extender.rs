use log::info;

use crate::session::Frequency;
use crate::timebase::PULSE_COUNTER_WIDTH;

// Software range extension for the pulse register: one tally increment per
// hardware wraparound, reset at the start of each cycle. A wrap of the tally
// itself means the input exceeded the measurable range and the cycle
// undercounts; that bound is the caller's to respect.
pub struct OverflowExtender {
    tally: u8,
}

impl OverflowExtender {
    pub fn new() -> Self {
        Self { tally: 0 }
    }

    pub fn tally(&self) -> u8 {
        self.tally
    }

    pub fn reset(&mut self) {
        self.tally = 0;
    }

    // The pulse counter overflow handler body: one wrap, one increment.
    pub fn record_overflow(&mut self) {
        self.tally = self.tally.wrapping_add(1);
        info!(target: "pulseevents", "Pulse register wrapped. Overflow tally: {}", self.tally);
    }

    // Combines the frozen register value with the tally of full periods.
    pub fn extend(&self, pulse_count: u16) -> Frequency {
        (Frequency::from(self.tally) << PULSE_COUNTER_WIDTH) + Frequency::from(pulse_count)
    }
}
