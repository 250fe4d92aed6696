//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry and the DefaultLogger formatting/threshold.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "sd2::Camera".to_string(),
        message: "Perspective projection set".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label().trim(), "WARN");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_threshold() {
    let logger = DefaultLogger::new();
    assert_eq!(logger.min_severity(), LogSeverity::Debug);
    assert!(!logger.accepts(LogSeverity::Trace));
    assert!(logger.accepts(LogSeverity::Debug));
    assert!(logger.accepts(LogSeverity::Error));

    let quiet = DefaultLogger::with_min_severity(LogSeverity::Warn);
    assert!(!quiet.accepts(LogSeverity::Info));
    assert!(quiet.accepts(LogSeverity::Warn));
}

#[test]
fn test_format_without_file_line() {
    let line = DefaultLogger::format(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[sd2::Camera]"));
    assert!(line.ends_with("Perspective projection set"));
}

#[test]
fn test_format_with_file_line() {
    let line = DefaultLogger::format(&entry(LogSeverity::Error, Some("camera.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(camera.rs:42)"));
}

#[test]
fn test_format_ignores_partial_location() {
    let line = DefaultLogger::format(&entry(LogSeverity::Error, Some("camera.rs"), None));
    assert!(!line.contains("camera.rs"));
}

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger::with_min_severity(LogSeverity::Trace);
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Error, Some("log_tests.rs"), Some(1)));
}

#[test]
fn test_logger_trait_object() {
    let logger: Box<dyn Logger> = Box::new(DefaultLogger::default());
    logger.log(&entry(LogSeverity::Warn, None, None));
}
