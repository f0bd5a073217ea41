use std::ops::Add;
use std::time::{Duration, SystemTime};

use structopt::StructOpt;

use pulsegate::config::{Config, Opt};
use pulsegate::logging::logger::{self, Logger};
use pulsegate::meter::Meter;

fn main() {
    let opt = Opt::from_args();
    logger::init(Logger {
        log_gate_ticks: opt.log_gate_ticks,
        log_gate_events: opt.log_gate_events,
        log_pulse_events: opt.log_pulse_events,
        log_measurements: opt.log_measurements,
    })
    .unwrap();

    let config = Config::new(&opt);
    let mut display = Config::display(&opt);
    let mut meter = Meter::new(&config);

    println!("Gating a {} Hz input through a one second window.", config.frequency);

    // Each gate cycle is paced out to roughly one wall clock second so the
    // readout behaves like the instrument it models.
    loop {
        let start_time = SystemTime::now();
        let intended_cycle_end_time = start_time.add(Duration::from_secs(1));

        meter.step_cycle(display.as_mut());

        if let Some(stop_cycle) = config.stop_cycle {
            if meter.completed_cycles() >= stop_cycle {
                println!();
                break;
            }
        }

        let end_time = SystemTime::now();
        if let Ok(duration) = intended_cycle_end_time.duration_since(end_time) {
            std::thread::sleep(duration);
        }
    }
}
