use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(LevelFilter::Info))
}

pub struct Logger {
    pub log_gate_ticks: bool,
    pub log_gate_events: bool,
    pub log_pulse_events: bool,
    pub log_measurements: bool,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.target() {
            "" => true,
            "gateticks" => self.log_gate_ticks,
            "gateevents" => self.log_gate_events,
            "pulseevents" => self.log_pulse_events,
            "measurements" => self.log_measurements,
            target => {
                let chunks: Vec<&str> = target.split("::").collect();
                match chunks[..] {
                    ["pulsegate", ..] => true,
                    _ => panic!("Unexpected logger target: {target}"),
                }
            }
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if record.level() < Level::Info {
                print!("{} - ", record.level());
            }

            println!("{}", record.args());
        }
    }

    fn flush(&self) {}
}
