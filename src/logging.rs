// src/logging.rs
//! Stderr sink for the `log` facade.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{} {}", tag(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn tag(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "error:".red().bold(),
        Level::Warn => "warn:".yellow().bold(),
        Level::Info => "info:".cyan(),
        Level::Debug | Level::Trace => "debug:".dimmed(),
    }
}

/// Maps the `--verbose` flag to a level filter.
#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the stderr logger. A second call is a no-op.
pub fn init(verbose: bool) {
    let level = level_for(verbose);
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
