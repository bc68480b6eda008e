pub mod logger;

pub use logger::{ConsoleLogger, Logger, RecordingLogger, format_log_line};
