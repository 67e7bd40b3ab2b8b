//! Minimal stderr sink for the `log` facade.
//!
//! Output never goes to stdout so `--format json` stays machine-readable.

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use log::{Level, Log, Metadata, Record};
use owo_colors::OwoColorize;

struct StderrLogger {
    enable_color: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level().as_str().to_ascii_lowercase();
        if self.enable_color {
            let tag = match record.level() {
                Level::Error => level.red().bold().to_string(),
                Level::Warn => level.yellow().bold().to_string(),
                Level::Info => level.green().to_string(),
                Level::Debug => level.cyan().to_string(),
                Level::Trace => level.dimmed().to_string(),
            };
            eprintln!("[{}] {}", tag, record.args());
        } else {
            eprintln!("[{}] {}", level, record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(level: LogLevel) {
    let logger = StderrLogger {
        enable_color: std::io::stderr().is_terminal(),
    };
    // set_boxed_logger fails once a logger is installed; the level still applies
    let _ = log::set_boxed_logger(Box::new(logger));
    log::set_max_level(level.into());
}
