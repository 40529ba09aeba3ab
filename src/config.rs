//! Upload configuration.
//!
//! Everything the pipeline needs beyond the CSV itself: the ingestion
//! endpoint, credentials, and the ambient identifiers stamped onto every
//! assembled event. Values come from CLI flags; credentials may also come
//! from the environment (loaded through `.env` in the binary).

use crate::models::ActivitySource;
use serde::{Deserialize, Serialize};

/// Default ingestion endpoint for activity uploads.
pub const DEFAULT_ENDPOINT: &str = "https://api2.netcoresmartech.com/v1/activity/upload";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SMARTECH_API_KEY";
/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "SMARTECH_ACCESS_TOKEN";

/// Configuration for assembling and rendering an upload request.
///
/// Empty credential fields are tolerated everywhere downstream: they
/// render as empty header values rather than being rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Ingestion API endpoint URL.
    pub endpoint: String,
    /// Bearer token for the `Authorization` header.
    pub api_key: String,
    /// Value for the `Access-Token` header.
    pub access_token: String,
    /// Asset id stamped onto every event.
    pub asset_id: String,
    /// Identity stamped onto every event.
    pub identity: String,
    /// Channel stamped onto every event.
    pub activity_source: ActivitySource,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            access_token: String::new(),
            asset_id: String::new(),
            identity: String::new(),
            activity_source: ActivitySource::Web,
        }
    }
}

impl UploadConfig {
    /// Fill empty credentials from the environment, if set.
    ///
    /// Explicit values always win over environment ones.
    pub fn with_env_credentials(mut self) -> Self {
        if self.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                self.api_key = key;
            }
        }
        if self.access_token.is_empty() {
            if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
                self.access_token = token;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.activity_source, ActivitySource::Web);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_explicit_credentials_win_over_env() {
        let config = UploadConfig {
            api_key: "explicit".into(),
            ..Default::default()
        };
        // env lookup is skipped entirely for non-empty fields
        let config = config.with_env_credentials();
        assert_eq!(config.api_key, "explicit");
    }
}
