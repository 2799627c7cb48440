use std::sync::OnceLock;
#[cfg(test)]
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

enum LogTarget {
    Stderr,
    /// Captured lines, used by tests to inspect output.
    #[cfg(test)]
    Memory(Mutex<Vec<String>>),
}

/// Minimal stderr logger. Report output goes to stdout, so log lines never
/// interleave with what a user may redirect into a file.
pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Logger {
    fn format_record(record: &Record<'_>) -> String {
        format!(
            "{} {} [{}] {}",
            Local::now().format(TIMESTAMP_FORMAT),
            record.level(),
            record.target(),
            record.args()
        )
    }

    #[cfg(test)]
    fn captured(&self) -> Vec<String> {
        match &self.target {
            LogTarget::Memory(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            LogTarget::Stderr => Vec::new(),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_record(record);
        match &self.target {
            LogTarget::Stderr => eprintln!("{line}"),
            #[cfg(test)]
            LogTarget::Memory(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }

    fn flush(&self) {}
}

fn level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

/// Install the process-wide logger, reading the level from `NATLIST_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first caller installs the logger; a later call with another
    // level must not move max_level away from the level the logger holds.
    let first_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
