//! Leveled progress logging for the pipeline.
//!
//! Pipeline steps report progress through these helpers so the CLI shows
//! the same narration regardless of which entry point ran. Output goes to
//! stderr, keeping stdout free for the rendered request / JSON payloads.

use serde::{Deserialize, Serialize};

/// Log level for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }

    /// Print the entry to stderr with its level prefix.
    pub fn emit(&self) {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        eprintln!("{} {}", prefix, self.message);
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_lowercase() {
        let entry = LogEntry::success("done");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"success\""));
        assert!(json.contains("\"done\""));
    }
}
