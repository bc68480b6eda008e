use colored::*;
use log::{Level, LevelFilter};
use std::sync::Mutex;

/// Logging sink handed to the request pipeline
pub trait Logger {
    fn log(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
}

/// Writes to the terminal, dropping anything above its threshold
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    threshold: LevelFilter,
    colored: bool,
}

impl ConsoleLogger {
    pub fn new(threshold: LevelFilter, colored: bool) -> Self {
        Self { threshold, colored }
    }

    /// Info by default, debug when verbose.
    pub fn from_verbosity(verbose: bool, colored: bool) -> Self {
        let threshold = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self::new(threshold, colored)
    }

    pub fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.threshold
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = format_log_line(level, message, self.colored);
        match level {
            Level::Error | Level::Warn => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Format a log line for terminal output
pub fn format_log_line(level: Level, message: &str, colored: bool) -> String {
    let prefix = match level {
        Level::Error => "[Error]",
        Level::Warn => "[Warning]",
        _ => return message.to_string(),
    };
    if !colored {
        return format!("{} {}", prefix, message);
    }
    let prefix = if level == Level::Error {
        prefix.red()
    } else {
        prefix.yellow()
    };
    format!("{} {}", prefix, message)
}

/// Keeps every record in memory, regardless of level
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_from_verbosity() {
        let quiet = ConsoleLogger::from_verbosity(false, false);
        assert_eq!(quiet.threshold(), LevelFilter::Info);
        assert!(quiet.enabled(Level::Info));
        assert!(!quiet.enabled(Level::Debug));

        let verbose = ConsoleLogger::from_verbosity(true, false);
        assert!(verbose.enabled(Level::Debug));
        assert!(!verbose.enabled(Level::Trace));
    }

    #[test]
    fn test_format_log_line_plain() {
        assert_eq!(format_log_line(Level::Info, "hello", false), "hello");
        assert_eq!(format_log_line(Level::Debug, "HTTP/1.1 200 OK", false), "HTTP/1.1 200 OK");
        assert_eq!(format_log_line(Level::Error, "boom", false), "[Error] boom");
        assert_eq!(format_log_line(Level::Warn, "hmm", false), "[Warning] hmm");
    }

    #[test]
    fn test_format_log_line_colored_keeps_message() {
        let line = format_log_line(Level::Error, "boom", true);
        assert!(line.contains("[Error]"));
        assert!(line.ends_with("boom"));
    }

    #[test]
    fn test_recording_logger_keeps_order() {
        let logger = RecordingLogger::new();
        logger.debug("headers");
        logger.info("body");
        logger.error("oops");
        assert_eq!(
            logger.records(),
            vec![
                (Level::Debug, "headers".to_string()),
                (Level::Info, "body".to_string()),
                (Level::Error, "oops".to_string()),
            ]
        );
        assert_eq!(logger.messages_at(Level::Info), vec!["body".to_string()]);
    }
}
