use crate::counter::hardware_counter::HardwareCounter;
use crate::counter::prescaler::Prescaler;
use crate::timebase::{GATE_TIMER_WIDTH, Timebase};

// The interval source: an 8-bit counter clocked from the internal clock
// through the prescaler. Used purely for timing, never for pulse data.
pub struct GateTimer {
    prescaler: Prescaler,
    counter: HardwareCounter,
}

impl GateTimer {
    pub fn new(timebase: Timebase) -> Self {
        Self {
            prescaler: Prescaler::new(timebase.prescale_divisor()),
            counter: HardwareCounter::new(GATE_TIMER_WIDTH),
        }
    }

    pub fn value(&self) -> u16 {
        self.counter.value()
    }

    pub fn is_running(&self) -> bool {
        self.counter.is_running()
    }

    // Raw internal clock cycles in, prescaled timer ticks out.
    pub fn prescale(&mut self, raw_cycles: u64) -> u64 {
        self.prescaler.advance(raw_cycles)
    }

    // One prescaled tick. True when the timer register overflows.
    pub fn tick(&mut self) -> bool {
        self.counter.clock()
    }

    // The countdown register accepts a forced preload so the next overflow
    // arrives after a sub-period instead of a full one.
    pub fn load_residual(&mut self, preload: u16) {
        self.counter.load(preload);
    }

    pub fn disable(&mut self) {
        self.counter.stop();
    }

    // Same sequence as first power-on: clear everything, then enable.
    pub fn restart(&mut self) {
        self.prescaler.reset();
        self.counter.reset();
        self.counter.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timebase::TIMEBASE;

    #[test]
    fn overflows_every_full_period() {
        let mut timer = GateTimer::new(TIMEBASE);
        timer.restart();
        for _ in 0..255 {
            assert!(!timer.tick());
        }

        assert!(timer.tick());
    }

    #[test]
    fn prescaler_batches_preserve_tick_counts() {
        let mut timer = GateTimer::new(TIMEBASE);
        timer.restart();
        assert_eq!(timer.prescale(1024), 1);
        assert_eq!(timer.prescale(512), 0);
        assert_eq!(timer.prescale(512), 1);
    }

    #[test]
    fn residual_preload_shortens_the_final_interval() {
        let mut timer = GateTimer::new(TIMEBASE);
        timer.restart();
        timer.load_residual(TIMEBASE.residual_preload());
        for _ in 0..74 {
            assert!(!timer.tick());
        }

        assert!(timer.tick());
    }

    #[test]
    fn disabled_timer_ignores_ticks() {
        let mut timer = GateTimer::new(TIMEBASE);
        timer.restart();
        timer.tick();
        timer.disable();

        assert!(!timer.tick());
        assert_eq!(timer.value(), 1);
    }
}
