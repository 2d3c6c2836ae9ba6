// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching gear.
//!
//! Handles:
//! - Gear fetching by ID
//! - Mapping non-2xx responses to [`StravaError::Http`] so callers can
//!   recognize quota exhaustion by status code

use crate::error::{AppError, StravaError};
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Source of remote gear records.
#[async_trait]
pub trait GearClient: Send + Sync {
    async fn get_gear(&self, gear_id: &str) -> Result<StravaGear, AppError>;
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a new Strava client using an already-valid access token.
    pub fn new(access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token,
        }
    }

    /// Point the client at a different API root (proxies, local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| StravaError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();

            if status == 429 {
                tracing::warn!("Strava rate limit hit (429)");
            }

            return Err(StravaError::Http { status, body }.into());
        }

        response
            .json()
            .await
            .map_err(|e| StravaError::Decode(e.to_string()).into())
    }
}

#[async_trait]
impl GearClient for StravaClient {
    /// GET /gear/{id}
    async fn get_gear(&self, gear_id: &str) -> Result<StravaGear, AppError> {
        let url = format!("{}/gear/{}", self.base_url, gear_id);
        self.get_json(&url).await
    }
}

/// Gear response from Strava.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StravaGear {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Meters
    pub distance: f64,
    /// Missing on some gear; the stored value is kept when absent.
    #[serde(default)]
    pub converted_distance: Option<f64>,
    /// Not always reported; treated as `false` when missing.
    #[serde(default)]
    pub retired: Option<bool>,
}

impl StravaGear {
    pub fn is_retired(&self) -> bool {
        self.retired.unwrap_or(false)
    }
}
