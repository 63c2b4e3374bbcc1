// Console Logger
//
// Writes to stderr so stdout only carries rendered export blocks.

use super::logger::{LogLevel, Logger};

pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    fn write(&self, level: LogLevel, tag: &str, msg: &str) {
        if self.is_enabled(level) {
            eprintln!("[{}] {}", tag, msg);
        }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        self.write(LogLevel::Debug, "DEBUG", msg);
    }

    fn info(&self, msg: &str) {
        self.write(LogLevel::Info, "INFO", msg);
    }

    fn warn(&self, msg: &str) {
        self.write(LogLevel::Warn, "WARN", msg);
    }

    fn error(&self, msg: &str) {
        self.write(LogLevel::Error, "ERROR", msg);
    }
}
