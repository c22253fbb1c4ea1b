//! Logger utility for application-wide logging
//!
//! This module provides a small logger implementation that plugs into
//! the standard log crate and writes formatted records to stderr.

use std::io::{self, Write};
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// Highest level this logger emits
    level: LevelFilter,
    /// Serializes writes so records from several threads don't interleave
    sink: Mutex<()>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `level` - Highest level that will be written
    pub fn new(level: LevelFilter) -> Self {
        Logger {
            level,
            sink: Mutex::new(()),
        }
    }

    /// The level this logger was created with
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Writes a single formatted line to stderr
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let _guard = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{}", message)?;
        handle.flush()
    }

    /// Formats a record as "[LEVEL] message"
    pub fn format_record(&self, record: &Record) -> String {
        format!("[{}] {}", record.level(), record.args())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(level: LevelFilter) {
        if log::set_boxed_logger(Box::new(Logger::new(level))).is_err() {
            // Another logger won the race; keep it and only adjust the level
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = self.format_record(record);
            let _ = self.write_line(&message);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
