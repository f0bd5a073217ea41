// The shipped instrument: a 20 MHz internal clock through the 1024 prescaler
// tap, an 8-bit gate timer, and a 16-bit pulse register extended by an 8-bit
// overflow tally.
pub const CLOCK_HZ: u64 = 20_000_000;
pub const PRESCALE_DIVISOR: u64 = 1024;

pub const GATE_TIMER_WIDTH: u32 = 8;
pub const PULSE_COUNTER_WIDTH: u32 = 16;
pub const OVERFLOW_TALLY_WIDTH: u32 = 8;

// True pulse counts at or above this bound wrap the overflow tally and the
// cycle silently undercounts. Not checked anywhere, only documented.
pub const MEASURABLE_RANGE: u32 = 1 << (PULSE_COUNTER_WIDTH + OVERFLOW_TALLY_WIDTH);

pub const TIMEBASE: Timebase = Timebase::derive(CLOCK_HZ, PRESCALE_DIVISOR);

// One second, expressed in gate timer behavior: a fixed number of full
// overflows, then one short final interval started from a forced preload that
// consumes exactly the leftover ticks. Derived once at compile time.
#[derive(Clone, Copy)]
pub struct Timebase {
    prescale_divisor: u64,
    ticks_per_second: u64,
    overflow_budget: u32,
    residual_ticks: u32,
    residual_preload: u16,
}

impl Timebase {
    pub const fn derive(clock_hz: u64, prescale_divisor: u64) -> Timebase {
        let ticks_per_second = clock_hz / prescale_divisor;
        let overflow_period = 1u64 << GATE_TIMER_WIDTH;

        let mut overflow_budget = ticks_per_second / overflow_period;
        let mut residual_ticks = ticks_per_second % overflow_period;
        if residual_ticks == 0 {
            // Trade one full overflow for a full-length final interval so the
            // sequencer always passes through LAST_INTERVAL.
            overflow_budget -= 1;
            residual_ticks = overflow_period;
        }

        assert!(overflow_budget >= 1, "gate clock must span more than one overflow period per second");

        Timebase {
            prescale_divisor,
            ticks_per_second,
            overflow_budget: overflow_budget as u32,
            residual_ticks: residual_ticks as u32,
            residual_preload: (overflow_period - residual_ticks) as u16,
        }
    }

    pub const fn prescale_divisor(&self) -> u64 {
        self.prescale_divisor
    }

    pub const fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }

    pub const fn overflow_budget(&self) -> u32 {
        self.overflow_budget
    }

    pub const fn residual_ticks(&self) -> u32 {
        self.residual_ticks
    }

    pub const fn residual_preload(&self) -> u16 {
        self.residual_preload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_constants() {
        assert_eq!(TIMEBASE.ticks_per_second(), 19531);
        assert_eq!(TIMEBASE.overflow_budget(), 76);
        assert_eq!(TIMEBASE.residual_ticks(), 75);
        assert_eq!(TIMEBASE.residual_preload(), 181);
    }

    #[test]
    fn one_megahertz_through_sixty_four() {
        let timebase = Timebase::derive(1_000_000, 64);
        assert_eq!(timebase.ticks_per_second(), 15625);
        assert_eq!(timebase.overflow_budget(), 61);
        assert_eq!(timebase.residual_ticks(), 9);
        assert_eq!(timebase.residual_preload(), 247);
    }

    #[test]
    fn zero_residual_is_normalized_to_a_full_final_interval() {
        let timebase = Timebase::derive(16_777_216, 256);
        assert_eq!(timebase.ticks_per_second(), 65536);
        assert_eq!(timebase.overflow_budget(), 255);
        assert_eq!(timebase.residual_ticks(), 256);
        assert_eq!(timebase.residual_preload(), 0);
    }

    #[test]
    fn gate_length_is_exact_for_any_legal_configuration() {
        let configurations = [
            (20_000_000, 1024),
            (20_000_000, 256),
            (16_000_000, 1024),
            (16_777_216, 256),
            (8_000_000, 64),
            (1_000_000, 64),
            (32_768, 1),
        ];
        for (clock_hz, prescale_divisor) in configurations {
            let timebase = Timebase::derive(clock_hz, prescale_divisor);
            let overflow_period = 1u64 << GATE_TIMER_WIDTH;
            let gate_ticks = u64::from(timebase.overflow_budget()) * overflow_period
                + u64::from(timebase.residual_ticks());
            assert_eq!(gate_ticks, timebase.ticks_per_second(), "{clock_hz} Hz / {prescale_divisor}");
            assert_eq!(
                u64::from(timebase.residual_preload()) + u64::from(timebase.residual_ticks()),
                overflow_period,
            );
        }
    }
}
