use strum_macros::Display;

// Progress through the one second window.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
pub enum GateState {
    Counting,
    LastInterval,
    Complete,
}

// What the gate timer overflow handler must do next.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GateEvent {
    Continue,
    BeginLastInterval,
    Complete,
}

// Counts down a budget of full gate timer overflows, then one residual
// interval. Overflow periods are not integer divisors of one second; the
// forced residual preload turns the approximate multiple-of-overflow window
// into an exact one without a higher resolution timer.
pub struct GateSequencer {
    // Immutable settings determined at compile time
    overflow_budget: u32,

    // State
    state: GateState,
    overflows_remaining: u32,
}

impl GateSequencer {
    pub fn new(overflow_budget: u32) -> Self {
        Self {
            overflow_budget,
            state: GateState::Counting,
            overflows_remaining: overflow_budget,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn overflows_remaining(&self) -> u32 {
        self.overflows_remaining
    }

    // One gate timer overflow, as seen by its interrupt handler.
    pub fn on_overflow(&mut self) -> GateEvent {
        use GateState::*;
        match self.state {
            Counting => {
                self.overflows_remaining -= 1;
                if self.overflows_remaining == 0 {
                    self.state = LastInterval;
                    GateEvent::BeginLastInterval
                } else {
                    GateEvent::Continue
                }
            }
            LastInterval => {
                self.state = Complete;
                GateEvent::Complete
            }
            // The gate timer is stopped for as long as the sequencer stays
            // complete, so an overflow here is a wiring bug.
            Complete => panic!("Gate timer overflow while the gate was already complete."),
        }
    }

    pub fn restart(&mut self) {
        self.state = GateState::Counting;
        self.overflows_remaining = self.overflow_budget;
    }
}
