//! Render assembled events into a literal upload request description.
//!
//! Nothing is ever sent: the output is a `curl` command the user can
//! inspect and run themselves.

use crate::config::UploadConfig;
use crate::models::ActivityEvent;

/// Render the upload request as a multi-line `curl` command.
///
/// Headers appear in fixed order: `Authorization`, `Access-Token`,
/// `Content-Type`. Missing credentials render as empty header values
/// rather than omitting the header, so the command's shape is stable. The
/// body is the event list pretty-printed with 2-space indentation.
pub fn render_curl(
    events: &[ActivityEvent],
    config: &UploadConfig,
) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(events)?;

    Ok(format!(
        "curl --location --request POST '{endpoint}' \\\n\
         --header 'Authorization: Bearer {api_key}' \\\n\
         --header 'Access-Token: {access_token}' \\\n\
         --header 'Content-Type: application/json' \\\n\
         --data '{body}'",
        endpoint = config.endpoint,
        api_key = config.api_key,
        access_token = config.access_token,
        body = body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivitySource;
    use serde_json::Map;

    fn event(name: &str) -> ActivityEvent {
        ActivityEvent {
            asset_id: "A1".into(),
            activity_name: name.into(),
            timestamp: "2024-06-01T12:30:45".into(),
            identity: "U1".into(),
            activity_source: ActivitySource::Web,
            activity_params: Map::new(),
        }
    }

    #[test]
    fn test_render_shape_and_header_order() {
        let config = UploadConfig {
            endpoint: "https://example.test/upload".into(),
            api_key: "KEY".into(),
            access_token: "TOKEN".into(),
            ..Default::default()
        };

        let curl = render_curl(&[event("Login")], &config).unwrap();
        let lines: Vec<&str> = curl.lines().collect();

        assert_eq!(lines[0], "curl --location --request POST 'https://example.test/upload' \\");
        assert_eq!(lines[1], "--header 'Authorization: Bearer KEY' \\");
        assert_eq!(lines[2], "--header 'Access-Token: TOKEN' \\");
        assert_eq!(lines[3], "--header 'Content-Type: application/json' \\");
        assert!(lines[4].starts_with("--data '["));
        assert!(curl.contains("\"activity_name\": \"Login\""));
    }

    #[test]
    fn test_missing_credentials_render_empty() {
        let config = UploadConfig::default();
        let curl = render_curl(&[], &config).unwrap();

        assert!(curl.contains("--header 'Authorization: Bearer ' \\"));
        assert!(curl.contains("--header 'Access-Token: ' \\"));
        assert!(curl.ends_with("--data '[]'"));
    }

    #[test]
    fn test_body_uses_two_space_indent() {
        let config = UploadConfig::default();
        let curl = render_curl(&[event("Login")], &config).unwrap();

        assert!(curl.contains("  {\n    \"asset_id\": \"A1\""));
    }
}
