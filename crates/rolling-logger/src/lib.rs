//! Rolling Logger
//!
//! `log` backend that keeps the newest records in a circular buffer and
//! forwards every record to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// A captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Snapshot of the buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Most recent record at `level` or more severe
    pub fn last_at(&self, level: Level) -> Option<LogEntry> {
        self.recent().into_iter().rev().find(|e| e.level <= level)
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        sink::write(entry.level, &entry.format());
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install a [`RollingLogger`] as the global `log` backend.
///
/// The returned reference stays valid for the life of the program so the
/// history can be read back later.
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(capacity, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use log::Level;

    pub fn write(level: Level, line: &str) {
        let value = line.into();
        match level {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use log::Level;

    pub fn write(_level: Level, line: &str) {
        eprintln!("{line}");
    }
}
