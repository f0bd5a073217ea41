use log::warn;
use structopt::StructOpt;
use strum_macros::{Display, EnumString};

use crate::display::buffer_display::BufferDisplay;
use crate::display::console_display::ConsoleDisplay;
use crate::display::display::Display as ReadoutDisplay;
use crate::display::null_display::NullDisplay;
use crate::timebase::{MEASURABLE_RANGE, TIMEBASE, Timebase};

pub struct Config {
    pub frequency: u32,
    pub timebase: Timebase,
    pub stop_cycle: Option<u64>,
}

impl Config {
    pub fn new(opt: &Opt) -> Config {
        if opt.frequency >= MEASURABLE_RANGE {
            warn!(
                "{} Hz exceeds the measurable range ({} Hz). The reading will silently undercount.",
                opt.frequency, MEASURABLE_RANGE,
            );
        }

        Config {
            frequency: opt.frequency,
            timebase: TIMEBASE,
            stop_cycle: opt.stop_cycle,
        }
    }

    pub fn display(opt: &Opt) -> Box<dyn ReadoutDisplay> {
        match opt.display {
            DisplayKind::Console => Box::new(ConsoleDisplay::new()) as Box<dyn ReadoutDisplay>,
            DisplayKind::Null => Box::new(NullDisplay),
            DisplayKind::Buffer => Box::new(BufferDisplay::new()),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "PULSEGATE", about = "A cycle accurate gated frequency counter.")]
pub struct Opt {
    // The simulated input signal, in hertz.
    #[structopt(name = "FREQUENCY")]
    pub frequency: u32,

    #[structopt(short, long, default_value = "console")]
    pub display: DisplayKind,

    #[structopt(name = "stopcycle", long)]
    pub stop_cycle: Option<u64>,

    #[structopt(long)]
    pub log_gate_ticks: bool,

    #[structopt(long)]
    pub log_gate_events: bool,

    #[structopt(long)]
    pub log_pulse_events: bool,

    #[structopt(long)]
    pub log_measurements: bool,
}

#[derive(Debug, Clone, Copy, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayKind {
    Console,
    Null,
    Buffer,
}
