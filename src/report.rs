//! Severity-tagged reporting for check outcomes.
//!
//! Operator-facing output goes through the [`Reporter`] trait so the checker
//! logic never writes to stdout directly and tests can capture lines without
//! parsing colorized strings.

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::sync::Mutex;

/// Severity of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warn,
    Info,
}

impl Severity {
    /// Tag printed after the timestamp.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Success => "SUCCESS",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
        }
    }
}

/// Sink for check outcome lines.
pub trait Reporter {
    fn emit(&self, severity: Severity, message: &str);
}

/// Reporter that prints `<timestamp> <TAG> <message>` lines to stdout.
///
/// Tags are colorized per severity; `colored` skips the escape codes when
/// stdout is not a terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, severity: Severity, message: &str) {
        let tag = match severity {
            Severity::Success => severity.tag().green(),
            Severity::Error => severity.tag().red(),
            Severity::Warn => severity.tag().yellow(),
            Severity::Info => severity.tag().cyan(),
        };
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        println!("{} {} {}", timestamp, tag, message);
    }
}

/// Reporter that collects lines in memory for inspection in tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far, in order.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().unwrap().clone()
    }

    /// Number of lines with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    /// Whether any line with the given severity contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|(s, msg)| *s == severity && msg.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn emit(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::Success.tag(), "SUCCESS");
        assert_eq!(Severity::Error.tag(), "ERROR");
        assert_eq!(Severity::Warn.tag(), "WARN");
        assert_eq!(Severity::Info.tag(), "INFO");
    }

    #[test]
    fn test_memory_reporter_captures_in_order() {
        let reporter = MemoryReporter::new();
        reporter.emit(Severity::Info, "first");
        reporter.emit(Severity::Warn, "second");

        let records = reporter.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], (Severity::Info, "first".to_string()));
        assert_eq!(records[1], (Severity::Warn, "second".to_string()));
        assert_eq!(reporter.count(Severity::Warn), 1);
        assert!(reporter.contains(Severity::Info, "fir"));
        assert!(!reporter.contains(Severity::Error, "first"));
    }
}
