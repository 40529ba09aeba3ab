//! Payload path resolution.
//!
//! Decides where a synthesized value lands inside an open event
//! definition: either a direct parameter key, or a field of the single
//! item record when the path uses the `items[].` form.

use crate::models::EventDefinition;
use serde_json::{Map, Value};

/// Marker that routes a payload path into the item record.
const ITEM_PREFIX: &str = "items[].";

/// Write a synthesized value into the definition at the given payload path.
///
/// Paths containing `items[].` take everything after the first occurrence
/// as the item field name, verbatim — no further dot-path parsing. All
/// other paths are verbatim direct keys into `params`. Either way, a
/// repeated key overwrites the prior value.
pub fn write_payload(def: &mut EventDefinition, path: &str, value: Value) {
    match split_item_field(path) {
        Some(field) => {
            let item = def.item.get_or_insert_with(Map::new);
            item.insert(field.to_string(), value);
        }
        None => {
            def.params.insert(path.to_string(), value);
        }
    }
}

/// Everything after the first `items[].`, if the path contains one.
fn split_item_field(path: &str) -> Option<&str> {
    path.find(ITEM_PREFIX).map(|i| &path[i + ITEM_PREFIX.len()..])
}
