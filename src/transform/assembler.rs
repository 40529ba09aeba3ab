//! Assemble grouped definitions into final activity events.
//!
//! Merges each [`EventDefinition`] with the ambient configuration and a
//! wall-clock timestamp. Assembly order matches grouping order; nothing is
//! reordered or deduplicated.

use crate::clock::Clock;
use crate::config::UploadConfig;
use crate::models::{ActivityEvent, EventDefinition};

/// Timestamp format of assembled events: whole seconds, no offset suffix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Build the final event list from grouped definitions.
///
/// The clock is read once per definition, so timestamps advance per event
/// on a real clock rather than sharing one point in time.
pub fn assemble(
    definitions: Vec<EventDefinition>,
    config: &UploadConfig,
    clock: &dyn Clock,
) -> Vec<ActivityEvent> {
    definitions
        .into_iter()
        .map(|def| ActivityEvent {
            asset_id: config.asset_id.clone(),
            activity_name: def.activity_name.clone(),
            timestamp: clock.now().format(TIMESTAMP_FORMAT).to_string(),
            identity: config.identity.clone(),
            activity_source: config.activity_source,
            activity_params: def.into_params(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::ActivitySource;
    use serde_json::json;

    fn config() -> UploadConfig {
        UploadConfig {
            asset_id: "A1".into(),
            identity: "U1".into(),
            activity_source: ActivitySource::Web,
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_comes_from_config() {
        let defs = vec![EventDefinition::new("Login")];
        let clock = FixedClock::at(2024, 6, 1, 12, 30, 45);

        let events = assemble(defs, &config(), &clock);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].asset_id, "A1");
        assert_eq!(events[0].identity, "U1");
        assert_eq!(events[0].activity_source, ActivitySource::Web);
        assert_eq!(events[0].activity_name, "Login");
        assert_eq!(events[0].timestamp, "2024-06-01T12:30:45");
    }

    #[test]
    fn test_order_preserved_with_duplicates() {
        let defs = vec![
            EventDefinition::new("A"),
            EventDefinition::new("B"),
            EventDefinition::new("A"),
        ];
        let clock = FixedClock::at(2024, 6, 1, 0, 0, 0);

        let events = assemble(defs, &config(), &clock);
        let names: Vec<_> = events.iter().map(|e| e.activity_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_item_record_frozen_into_params() {
        let mut def = EventDefinition::new("Purchase");
        def.params.insert("amount".into(), json!(42.5));
        def.item
            .get_or_insert_with(Default::default)
            .insert("sku".into(), json!("Sample Text"));
        let clock = FixedClock::at(2024, 6, 1, 0, 0, 0);

        let events = assemble(vec![def], &config(), &clock);
        assert_eq!(events[0].activity_params.get("amount"), Some(&json!(42.5)));
        assert_eq!(
            events[0].activity_params.get("items"),
            Some(&json!([{ "sku": "Sample Text" }]))
        );
    }
}
