use log::info;

use crate::gate::gate_sequencer::{GateEvent, GateSequencer, GateState};
use crate::gate::gate_timer::GateTimer;
use crate::pulse::overflow_extender::OverflowExtender;
use crate::pulse::pulse_accumulator::PulseAccumulator;
use crate::timebase::Timebase;

// A completed gate spans exactly one second, so the combined pulse count is
// the input frequency in hertz.
pub type Frequency = u32;

// Everything shared between the interrupt domain and the cooperative loop.
// One instance lives for the whole process and is only ever mutated through
// the operations below. Each shared field has a single writer: the overflow
// handlers write, the controller reads once data_ready says the counters have
// stopped.
pub struct MeasurementSession {
    timebase: Timebase,

    pulse_accumulator: PulseAccumulator,
    overflow_extender: OverflowExtender,
    gate_timer: GateTimer,
    gate_sequencer: GateSequencer,
    data_ready: bool,
}

impl MeasurementSession {
    pub fn new(timebase: Timebase) -> Self {
        Self {
            timebase,
            pulse_accumulator: PulseAccumulator::new(),
            overflow_extender: OverflowExtender::new(),
            gate_timer: GateTimer::new(timebase),
            gate_sequencer: GateSequencer::new(timebase.overflow_budget()),
            data_ready: false,
        }
    }

    pub fn timebase(&self) -> Timebase {
        self.timebase
    }

    pub fn gate_state(&self) -> GateState {
        self.gate_sequencer.state()
    }

    pub fn pulse_count(&self) -> u16 {
        self.pulse_accumulator.read()
    }

    pub fn overflow_tally(&self) -> u8 {
        self.overflow_extender.tally()
    }

    // Lockstep start of a measurement cycle. The same path serves power-on
    // and every restart: the gate timer comes up first, then the pulse
    // counter, matching the hardware bring-up order.
    pub fn start_cycle(&mut self) {
        self.data_ready = false;
        self.overflow_extender.reset();
        self.gate_sequencer.restart();
        self.gate_timer.restart();
        self.pulse_accumulator.start();
    }

    // Transitions of the external input since the last call. Each wraparound
    // runs the pulse overflow handler.
    pub fn clock_input_edges(&mut self, edges: u32) {
        for _ in 0..edges {
            if self.pulse_accumulator.clock_edge() {
                self.overflow_extender.record_overflow();
            }
        }
    }

    // Raw internal clock cycles, prescaled down to gate timer ticks. Each
    // overflow runs the gate timer handler.
    pub fn clock_gate_cycles(&mut self, raw_cycles: u64) {
        let ticks = self.gate_timer.prescale(raw_cycles);
        for _ in 0..ticks {
            if self.gate_timer.tick() {
                self.on_gate_overflow();
            }
        }
    }

    // The gate timer overflow handler body: the minimal state transition and
    // nothing slow.
    fn on_gate_overflow(&mut self) {
        match self.gate_sequencer.on_overflow() {
            GateEvent::Continue => {
                info!(
                    target: "gateticks",
                    "Gate timer overflow. {} remaining.", self.gate_sequencer.overflows_remaining(),
                );
            }
            GateEvent::BeginLastInterval => {
                self.gate_timer.load_residual(self.timebase.residual_preload());
                info!(
                    target: "gateevents",
                    "Residual preload {} forced. Gate state: {}.",
                    self.timebase.residual_preload(), self.gate_sequencer.state(),
                );
            }
            GateEvent::Complete => {
                // Pulse counter first so no edge lands after the window
                // closed, then the interval source, then the handoff flag.
                self.pulse_accumulator.stop();
                self.gate_timer.disable();
                self.data_ready = true;
                info!(
                    target: "gateevents",
                    "Gate complete. Pulse register: {}, overflow tally: {}.",
                    self.pulse_accumulator.read(), self.overflow_extender.tally(),
                );
            }
        }
    }

    pub fn data_ready(&self) -> bool {
        self.data_ready
    }

    // The single point of handoff between the two domains. Reading clears.
    pub fn take_data_ready(&mut self) -> bool {
        let ready = self.data_ready;
        self.data_ready = false;
        ready
    }

    // Only meaningful between the gate completing and the next start_cycle().
    pub fn frequency(&self) -> Frequency {
        self.overflow_extender.extend(self.pulse_accumulator.read())
    }
}
