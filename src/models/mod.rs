//! Domain models for the activity upload pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`EventRow`] - One CSV row of the event schema, typed
//! - [`EventDefinition`] - In-progress accumulator for one event during grouping
//! - [`ActivityEvent`] - Final upload payload entry
//! - [`ActivitySource`] - Channel the activity is attributed to (web/app)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Activity Source
// =============================================================================

/// Channel an activity is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySource {
    /// Browser-originated activity.
    #[default]
    Web,
    /// Mobile app activity.
    App,
}

impl ActivitySource {
    /// Parse a source from its wire token.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "web" => Some(Self::Web),
            "app" => Some(Self::App),
            _ => None,
        }
    }

    /// Convert to the wire token.
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
        }
    }
}

// =============================================================================
// Event Row
// =============================================================================

/// One row of the event schema CSV.
///
/// Only three columns matter: `eventName`, `eventPayload`, `dataType`.
/// Anything else in the record is ignored. Empty cells are normalized to
/// `None`, so a row with neither name nor payload is a no-op for grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRow {
    /// Opens a new event definition when present.
    pub event_name: Option<String>,
    /// Payload path to populate on the open event.
    pub event_payload: Option<String>,
    /// Declared data type for the payload's sample value.
    pub data_type: Option<String>,
}

impl EventRow {
    /// Extract a typed row from a header-keyed parsed record.
    pub fn from_record(record: &Value) -> Self {
        Self {
            event_name: field(record, "eventName"),
            event_payload: field(record, "eventPayload"),
            data_type: field(record, "dataType"),
        }
    }

    /// True when the row neither opens an event nor carries a payload.
    pub fn is_noop(&self) -> bool {
        self.event_name.is_none() && self.event_payload.is_none()
    }
}

fn field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

// =============================================================================
// Event Definition
// =============================================================================

/// In-progress accumulator for one activity event during grouping.
///
/// `params` keeps insertion order. The single item record is modeled as an
/// optional mapping rather than a sequence: the schema format only ever
/// describes index 0 of the item array, so a second element is
/// unrepresentable by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDefinition {
    /// Name the event was opened with.
    pub activity_name: String,
    /// Direct payload parameters, in first-assignment order.
    pub params: Map<String, Value>,
    /// Lazily created record backing the `items` array.
    pub item: Option<Map<String, Value>>,
}

impl EventDefinition {
    /// Open a fresh definition for the given event name.
    pub fn new(activity_name: impl Into<String>) -> Self {
        Self {
            activity_name: activity_name.into(),
            params: Map::new(),
            item: None,
        }
    }

    /// Freeze the accumulated state into final `activity_params`.
    ///
    /// The item record, when populated, becomes a one-element array under
    /// the reserved `items` key.
    pub fn into_params(self) -> Map<String, Value> {
        let mut params = self.params;
        if let Some(item) = self.item {
            params.insert("items".to_string(), Value::Array(vec![Value::Object(item)]));
        }
        params
    }
}

// =============================================================================
// Activity Event
// =============================================================================

/// One entry of the upload request body.
///
/// Metadata (`asset_id`, `identity`, `activity_source`) comes from
/// configuration, never from row content; `activity_name` and
/// `activity_params` come from the grouped definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    pub asset_id: String,
    pub activity_name: String,
    /// Whole-second timestamp, `YYYY-MM-DDTHH:MM:SS`, no offset suffix.
    pub timestamp: String,
    pub identity: String,
    pub activity_source: ActivitySource,
    pub activity_params: Map<String, Value>,
}

// =============================================================================
// Tests
// =============================================================================
