//! Generic CSV to JSON record parser with encoding and delimiter auto-detection.
//!
//! Converts CSV rows into header-keyed JSON objects. No event-schema logic
//! here; typed extraction lives in [`crate::models::EventRow`].

use crate::error::{CsvError, CsvResult};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Result of parsing with detection metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records as JSON objects, one per data line.
    pub records: Vec<Value>,
    /// Detected or used encoding.
    pub encoding: String,
    /// Detected or used delimiter.
    pub delimiter: char,
    /// Column headers, in file order.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet, normalized to a
/// canonical charset name.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8 so a mislabeled file still
/// yields rows rather than an error.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.to_string(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    };
    Ok(decoded)
}

/// Detect the delimiter by counting candidates in the header line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best = (';', 0);
    for sep in [';', ',', '\t', '|'] {
        let count = first_line.matches(sep).count();
        if count > best.1 {
            best = (sep, count);
        }
    }
    best.0
}

/// Parse CSV content into header-keyed JSON records.
///
/// Empty lines are skipped; short rows are padded with empty strings and
/// extra cells are dropped. Cell values are trimmed and unquoted.
///
/// # Example
/// ```ignore
/// let rows = actiload::csv_to_records("eventName,dataType\nLogin,text", ',')?;
/// assert_eq!(rows[0]["eventName"], "Login");
/// ```
pub fn csv_to_records(content: &str, delimiter: char) -> CsvResult<Vec<Value>> {
    let mut lines = content.lines();

    let header_line = lines.next().ok_or(CsvError::EmptyFile)?;
    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(clean_cell)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(delimiter).collect();
        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let value = cells.get(i).map(|c| clean_cell(c)).unwrap_or_default();
            obj.insert(header.clone(), json!(value));
        }
        records.push(Value::Object(obj));
    }

    Ok(records)
}

fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('"').to_string()
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    let headers: Vec<String> = content
        .lines()
        .next()
        .map(|l| l.split(delimiter).map(clean_cell).collect())
        .unwrap_or_default();
    let records = csv_to_records(&content, delimiter)?;

    Ok(ParseResult { records, encoding, delimiter, headers })
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}
