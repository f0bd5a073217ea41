use crate::signal::pulse_source::PulseSource;

// A steady pulse train at a fixed rate. Pulses are distributed across gate
// ticks by error accumulation, so any span of ticks_per_second consecutive
// ticks carries exactly `frequency` pulses regardless of phase.
pub struct PulseTrain {
    frequency: u64,
    ticks_per_second: u64,

    error: u64,
}

impl PulseTrain {
    pub fn new(frequency: u32, ticks_per_second: u64) -> Self {
        Self {
            frequency: u64::from(frequency),
            ticks_per_second,
            error: 0,
        }
    }
}

impl PulseSource for PulseTrain {
    fn pulses_before_next_tick(&mut self) -> u32 {
        self.error += self.frequency;
        let pulses = self.error / self.ticks_per_second;
        self.error %= self.ticks_per_second;
        pulses as u32
    }
}
