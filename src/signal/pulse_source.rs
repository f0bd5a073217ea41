// Stimulus for the instrument: how many input transitions arrive before the
// next prescaled gate timer tick.
pub trait PulseSource {
    fn pulses_before_next_tick(&mut self) -> u32;
}
