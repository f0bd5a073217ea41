// A clock divider sitting between an internal clock and a counter input.
pub struct Prescaler {
    divisor: u64,

    count: u64,
}

impl Prescaler {
    pub const fn new(divisor: u64) -> Self {
        assert!(divisor >= 1);
        Self { divisor, count: 0 }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    // Consumes raw input cycles and returns the output ticks produced.
    // The remainder carries over so batched callers can't lose sub-tick phase.
    pub fn advance(&mut self, raw_cycles: u64) -> u64 {
        self.count += raw_cycles;
        let ticks = self.count / self.divisor;
        self.count %= self.divisor;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_the_divisor() {
        let mut prescaler = Prescaler::new(1024);
        assert_eq!(prescaler.advance(1024), 1);
        assert_eq!(prescaler.advance(2048), 2);
    }

    #[test]
    fn remainder_carries_between_batches() {
        let mut prescaler = Prescaler::new(1024);
        assert_eq!(prescaler.advance(1000), 0);
        assert_eq!(prescaler.advance(24), 1);
        assert_eq!(prescaler.advance(1023), 0);
        assert_eq!(prescaler.advance(1), 1);
    }

    #[test]
    fn unit_divisor_passes_through() {
        let mut prescaler = Prescaler::new(1);
        assert_eq!(prescaler.advance(76), 76);
    }

    #[test]
    fn reset_discards_the_remainder() {
        let mut prescaler = Prescaler::new(1024);
        prescaler.advance(1000);
        prescaler.reset();
        assert_eq!(prescaler.advance(1023), 0);
    }
}
