//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local runs.

use std::env;
use std::time::Duration;

use crate::services::strava::DEFAULT_BASE_URL;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava access token with `profile:read_all` scope
    pub strava_access_token: String,
    /// Strava API root
    pub strava_api_base_url: String,
    /// GCP project holding the Firestore database
    pub gcp_project_id: String,
    /// Pause after each gear fetched from Strava
    pub gear_throttle: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_access_token: "test_access_token".to_string(),
            strava_api_base_url: DEFAULT_BASE_URL.to_string(),
            gcp_project_id: "test-project".to_string(),
            gear_throttle: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let gear_throttle_secs = match env::var("GEAR_IMPORT_THROTTLE_SECS") {
            Ok(v) => v.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "GEAR_IMPORT_THROTTLE_SECS",
                value: v,
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            strava_access_token: env::var("STRAVA_ACCESS_TOKEN")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_ACCESS_TOKEN"))?,
            strava_api_base_url: env::var("STRAVA_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            gear_throttle: Duration::from_secs(gear_throttle_secs),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
