use crate::config::Config;
use crate::controller::MeasurementController;
use crate::display::display::Display;
use crate::session::{Frequency, MeasurementSession};
use crate::signal::pulse_source::PulseSource;
use crate::signal::pulse_train::PulseTrain;
use crate::timebase::Timebase;

// The instrument plus its stimulus: the top-level steppable machine. One step
// is one prescaled gate timer tick, the finest granularity at which anything
// observable happens.
pub struct Meter {
    session: MeasurementSession,
    source: Box<dyn PulseSource>,
    raw_cycles_per_tick: u64,
    completed_cycles: u64,
}

impl Meter {
    pub fn new(config: &Config) -> Meter {
        let source = PulseTrain::new(config.frequency, config.timebase.ticks_per_second());
        Meter::with_source(config.timebase, Box::new(source))
    }

    pub fn with_source(timebase: Timebase, source: Box<dyn PulseSource>) -> Meter {
        let mut session = MeasurementSession::new(timebase);
        session.start_cycle();
        Meter {
            session,
            source,
            raw_cycles_per_tick: timebase.prescale_divisor(),
            completed_cycles: 0,
        }
    }

    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    // One prescaled gate tick: input edges land first, then the gate clock,
    // then the cooperative poll.
    pub fn step(&mut self, display: &mut dyn Display) -> Option<Frequency> {
        let edges = self.source.pulses_before_next_tick();
        self.session.clock_input_edges(edges);
        self.session.clock_gate_cycles(self.raw_cycles_per_tick);

        let report = MeasurementController::poll(&mut self.session, display);
        if report.is_some() {
            self.completed_cycles += 1;
        }

        report
    }

    // Runs to the next completed gate.
    pub fn step_cycle(&mut self, display: &mut dyn Display) -> Frequency {
        loop {
            if let Some(frequency) = self.step(display) {
                return frequency;
            }
        }
    }
}
