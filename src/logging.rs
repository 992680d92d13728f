#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Stderr logger; stdout carries the board and JSON summaries.
struct BoardLogger;

impl log::Log for BoardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: BoardLogger = BoardLogger;

/// Render one log line as `LEVEL [target] message`, e.g.
/// `WARN  [goban::session] Activation dropped: No such cell: Z1`.
pub fn format_record(record: &Record) -> String {
    format!("{:<5} [{}] {}", record.level(), record.target(), record.args())
}

/// Initialize logging with a level taken from the `GOBAN_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var("GOBAN_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
