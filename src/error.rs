//! Error types for the activity upload pipeline.
//!
//! The core row-to-event transformation is total: unknown data types fall
//! back to a default sample, orphan payload rows are dropped, and empty
//! credentials render as empty strings. The only failures that reach a
//! caller come from upstream — reading and parsing the CSV, or writing
//! output — and are collected here.
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV parsing, with line context where known.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be decoded with the detected encoding.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Structural problem in the CSV content.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// File had no content at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header line yielded no column names.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors returned by the build pipeline and CLI.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));
    }

    #[test]
    fn test_parse_error_carries_line() {
        let err = CsvError::Parse { line: 5, message: "unterminated quote".into() };
        let msg = err.to_string();
        assert!(msg.contains("Line 5"));
        assert!(msg.contains("unterminated quote"));
    }
}
