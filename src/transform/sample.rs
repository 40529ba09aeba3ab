//! Sample value synthesis from declared data types.
//!
//! Each payload row declares a `dataType`; the upload preview fills the
//! parameter with a deterministic placeholder of that type instead of real
//! user data.

use crate::clock::Clock;
use serde_json::{json, Value};

/// Placeholder for `text` parameters.
pub const SAMPLE_TEXT: &str = "Sample Text";
/// Placeholder for unknown or missing data types.
pub const SAMPLE_DEFAULT: &str = "Sample Value";
/// Placeholder for `integer` parameters.
pub const SAMPLE_INTEGER: i64 = 42;
/// Placeholder for `float` parameters.
pub const SAMPLE_FLOAT: f64 = 42.5;

/// Synthesize a representative value for a declared data type.
///
/// Matching is case-insensitive. Unknown and absent types silently fall
/// back to [`SAMPLE_DEFAULT`]; this never errors. The `date` arm reads the
/// injected clock, formatted to whole seconds with no offset.
pub fn sample_value(data_type: Option<&str>, clock: &dyn Clock) -> Value {
    let normalized = data_type.map(|t| t.trim().to_lowercase()).unwrap_or_default();
    match normalized.as_str() {
        "text" => json!(SAMPLE_TEXT),
        "integer" => json!(SAMPLE_INTEGER),
        "float" => json!(SAMPLE_FLOAT),
        "date" => json!(clock.now().format("%Y-%m-%d %H:%M:%S").to_string()),
        _ => json!(SAMPLE_DEFAULT),
    }
}
