#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level (`error`, `warn`, `info`, ...).
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Level named by `SEABATTLE_LOG`, `warn` if unset or invalid.
pub fn log_level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Repeated calls are harmless.
pub fn init_logging() {
    let level = log_level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
