//! Group flat event-schema rows into event definitions.
//!
//! This module handles the critical step of grouping consecutive CSV rows
//! (one per payload parameter) into complete event definitions.
//!
//! # Architecture
//!
//! ```text
//! CSV Input (flat rows)                  →  Grouped Output
//! ┌───────────────────────────────────┐    ┌──────────────────────────────┐
//! │ eventName: Purchase               │    │ Purchase                     │
//! │ eventPayload: amount (float)      │ →  │   amount: 42.5               │
//! │ eventPayload: items[].sku (text)  │    │   items: [{sku: ...}]        │
//! │ eventName: Logout                 │    ├──────────────────────────────┤
//! └───────────────────────────────────┘    │ Logout  (no params)          │
//!                                          └──────────────────────────────┘
//! ```
//!
//! Grouping is positional, not keyed: a non-empty `eventName` closes the
//! previous definition and opens the next one, so output order is the
//! order event names first appear.

use crate::clock::Clock;
use crate::models::{EventDefinition, EventRow};
use crate::transform::resolver::write_payload;
use crate::transform::sample::sample_value;

/// Reduce an ordered row sequence into event definitions.
///
/// Single pass, two states: idle (no open definition) and accumulating.
/// Payload rows seen while idle have no definition to land in and are
/// dropped. The final open definition is flushed at end of input.
pub fn group_rows(rows: &[EventRow], clock: &dyn Clock) -> Vec<EventDefinition> {
    let mut definitions = Vec::new();
    let mut current: Option<EventDefinition> = None;

    for row in rows {
        if let Some(ref name) = row.event_name {
            if let Some(open) = current.take() {
                definitions.push(open);
            }
            current = Some(EventDefinition::new(name.clone()));
        }

        if let Some(ref path) = row.event_payload {
            if let Some(ref mut open) = current {
                let value = sample_value(row.data_type.as_deref(), clock);
                write_payload(open, path, value);
            }
        }
    }

    if let Some(open) = current {
        definitions.push(open);
    }

    definitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use serde_json::json;

    fn row(name: Option<&str>, payload: Option<&str>, data_type: Option<&str>) -> EventRow {
        EventRow {
            event_name: name.map(String::from),
            event_payload: payload.map(String::from),
            data_type: data_type.map(String::from),
        }
    }

    fn clock() -> FixedClock {
        FixedClock::at(2024, 6, 1, 12, 30, 45)
    }

    #[test]
    fn test_groups_consecutive_payload_rows() {
        let rows = vec![
            row(Some("Purchase"), None, None),
            row(None, Some("amount"), Some("float")),
            row(None, Some("items[].sku"), Some("text")),
            row(Some("Logout"), None, None),
        ];

        let defs = group_rows(&rows, &clock());
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].activity_name, "Purchase");
        assert_eq!(defs[0].params.get("amount"), Some(&json!(42.5)));
        assert_eq!(defs[0].item.as_ref().unwrap().get("sku"), Some(&json!("Sample Text")));
        assert_eq!(defs[1].activity_name, "Logout");
        assert!(defs[1].params.is_empty());
        assert!(defs[1].item.is_none());
    }

    #[test]
    fn test_name_row_can_carry_its_own_payload() {
        let rows = vec![row(Some("Signup"), Some("plan"), Some("text"))];

        let defs = group_rows(&rows, &clock());
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].params.get("plan"), Some(&json!("Sample Text")));
    }

    #[test]
    fn test_payload_rows_without_open_event_are_dropped() {
        let rows = vec![
            row(None, Some("orphan"), Some("text")),
            row(None, Some("items[].sku"), Some("text")),
        ];

        assert!(group_rows(&rows, &clock()).is_empty());
    }

    #[test]
    fn test_definition_count_matches_name_rows() {
        let rows = vec![
            row(Some("A"), None, None),
            row(None, Some("x"), None),
            row(Some("B"), None, None),
            row(Some("C"), None, None),
            row(None, None, None),
        ];

        let defs = group_rows(&rows, &clock());
        let names: Vec<_> = defs.iter().map(|d| d.activity_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_noop_rows_do_not_close_definitions() {
        let rows = vec![
            row(Some("A"), None, None),
            row(None, None, None),
            row(None, Some("after_gap"), Some("integer")),
        ];

        let defs = group_rows(&rows, &clock());
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].params.get("after_gap"), Some(&json!(42)));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_rows(&[], &clock()).is_empty());
    }
}
