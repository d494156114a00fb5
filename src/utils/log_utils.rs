//! Logging utilities for the application

use chrono::Local;
use std::sync::Arc;

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Problems; always displayed, written to stderr
    Error = -2,
    /// Recoverable problems; always displayed, written to stderr
    Warn = -1,
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

/// Destination for formatted log lines, injectable for tests
pub type LogSink = Arc<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Logger for application messages
#[derive(Clone)]
pub struct Logger {
    /// Current verbosity level
    verbosity: u8,
    sink: LogSink,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self::with_sink(verbosity, Arc::new(default_sink))
    }

    /// Create a logger that hands every displayed line to `sink`
    #[must_use]
    pub fn with_sink(verbosity: u8, sink: LogSink) -> Self {
        Self { verbosity, sink }
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        if i16::from(self.verbosity) >= level as i16 {
            (self.sink)(level, &format_line(msg, level));
        }
    }

    /// Log at normal level (always displayed)
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    pub fn warn(&self, msg: &str) {
        self.log(msg, LogLevel::Warn);
    }

    pub fn error(&self, msg: &str) {
        self.log(msg, LogLevel::Error);
    }
}

fn format_line(msg: &str, level: LogLevel) -> String {
    let ts = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    match level {
        LogLevel::Error => format!("{ts} error: {msg}"),
        LogLevel::Warn => format!("{ts} warn: {msg}"),
        LogLevel::Normal => format!("{ts} {msg}"),
        LogLevel::Info => format!("{ts} info: {msg}"),
        LogLevel::Debug => format!("{ts} dbg: {msg}"),
    }
}

fn default_sink(level: LogLevel, line: &str) {
    match level {
        LogLevel::Error | LogLevel::Warn => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}
