//! High-level pipeline API for CSV to activity event transformation.
//!
//! Combines all steps: parsing, typed row extraction, grouping, and
//! assembly. The whole run is synchronous and single-pass; the row
//! sequence is fully materialized before any event is assembled.
//!
//! # Example
//!
//! ```rust,ignore
//! use actiload::{build_from_path, SystemClock, UploadConfig};
//!
//! let result = build_from_path("schema.csv", &UploadConfig::default(), &SystemClock)?;
//! println!("Built {} events", result.events.len());
//! ```

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::clock::Clock;
use crate::config::UploadConfig;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{ActivityEvent, EventRow};
use crate::parser::{parse_bytes_auto, parse_csv_file_auto, ParseResult};
use crate::transform::assembler::assemble;
use crate::transform::grouper::group_rows;

/// Result of a complete build run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    /// Assembled events, in schema order.
    pub events: Vec<ActivityEvent>,
    /// CSV parsing metadata.
    pub csv_info: CsvInfo,
}

/// CSV file information.
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Build activity events from a CSV file.
///
/// This is the main entry point. It:
/// 1. Parses the CSV with encoding/delimiter auto-detection
/// 2. Extracts the `eventName`/`eventPayload`/`dataType` columns
/// 3. Groups rows into event definitions
/// 4. Assembles final events with config metadata and timestamps
pub fn build_from_path<P: AsRef<Path>>(
    path: P,
    config: &UploadConfig,
    clock: &dyn Clock,
) -> PipelineResult<BuildResult> {
    let parse_result = parse_csv_file_auto(path)?;
    Ok(build_parsed(parse_result, config, clock))
}

/// Build activity events from raw CSV bytes.
pub fn build_from_bytes(
    bytes: &[u8],
    config: &UploadConfig,
    clock: &dyn Clock,
) -> PipelineResult<BuildResult> {
    let parse_result = parse_bytes_auto(bytes)?;
    Ok(build_parsed(parse_result, config, clock))
}

/// Build activity events from already-parsed header-keyed records.
pub fn build_from_records(
    records: &[Value],
    config: &UploadConfig,
    clock: &dyn Clock,
) -> Vec<ActivityEvent> {
    let rows: Vec<EventRow> = records.iter().map(EventRow::from_record).collect();
    build_events(&rows, config, clock)
}

/// Core transformation: typed rows → assembled events. Total, never fails.
pub fn build_events(
    rows: &[EventRow],
    config: &UploadConfig,
    clock: &dyn Clock,
) -> Vec<ActivityEvent> {
    let definitions = group_rows(rows, clock);
    assemble(definitions, config, clock)
}

/// Internal: build from parsed CSV data, narrating progress.
fn build_parsed(parse_result: ParseResult, config: &UploadConfig, clock: &dyn Clock) -> BuildResult {
    log_info("📖 Reading CSV schema...");
    log_success(format!("Detected encoding: {}", parse_result.encoding));
    log_success(format!(
        "Detected separator: '{}'",
        format_delimiter(parse_result.delimiter)
    ));
    log_success(format!("Read {} rows", parse_result.records.len()));

    let csv_info = CsvInfo {
        encoding: parse_result.encoding,
        delimiter: parse_result.delimiter,
        headers: parse_result.headers,
        row_count: parse_result.records.len(),
    };

    let rows: Vec<EventRow> = parse_result.records.iter().map(EventRow::from_record).collect();
    let name_rows = rows.iter().filter(|r| r.event_name.is_some()).count();
    let orphan_payloads = rows
        .iter()
        .take_while(|r| r.event_name.is_none())
        .filter(|r| r.event_payload.is_some())
        .count();
    if orphan_payloads > 0 {
        log_warning(format!(
            "{} payload row(s) before the first event name are ignored",
            orphan_payloads
        ));
    }

    log_info("📦 Grouping rows into events...");
    let events = build_events(&rows, config, clock);
    log_success(format!("{} activity events ({} event name rows)", events.len(), name_rows));

    BuildResult { events, csv_info }
}

/// Format delimiter for display
fn format_delimiter(d: char) -> &'static str {
    match d {
        ';' => ";",
        ',' => ",",
        '\t' => "TAB",
        '|' => "|",
        _ => "?",
    }
}
