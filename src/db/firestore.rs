// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Activities (read-only here, to find referenced gear)
//! - Gear (mirrored Strava gear)
//! - Rate limits (daily quota markers)

use crate::db::{collections, ActivityRepository, GearRepository, RateLimitTracker};
use crate::error::AppError;
use crate::models::{Activity, Gear, RateLimitMark};
use crate::time_utils::{format_day, format_utc_rfc3339};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Gear Operations ─────────────────────────────────────────

    /// Get gear by Strava gear ID.
    pub async fn get_gear(&self, gear_id: &str) -> Result<Option<Gear>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::GEAR)
            .obj()
            .one(gear_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Rate Limit Operations ───────────────────────────────────

    /// Get the quota marker for a day.
    pub async fn get_rate_limit_mark(
        &self,
        day: NaiveDate,
    ) -> Result<Option<RateLimitMark>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::RATE_LIMITS)
            .obj()
            .one(&format_day(day))
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[async_trait]
impl ActivityRepository for FirestoreDb {
    async fn find_unique_gear_ids(&self) -> Result<BTreeSet<String>, AppError> {
        let activities: Vec<Activity> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .obj::<Activity>()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let gear_ids: BTreeSet<String> = activities
            .iter()
            .filter_map(|a| a.gear_id())
            .map(str::to_string)
            .collect();

        tracing::debug!(
            activities = activities.len(),
            gear = gear_ids.len(),
            "Collected gear IDs from activities"
        );

        Ok(gear_ids)
    }
}

#[async_trait]
impl GearRepository for FirestoreDb {
    async fn find_gear(&self, gear_id: &str) -> Result<Option<Gear>, AppError> {
        self.get_gear(gear_id).await
    }

    async fn add_gear(&self, gear: &Gear) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::GEAR)
            .document_id(&gear.gear_id)
            .object(gear)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn update_gear(&self, gear: &Gear) -> Result<(), AppError> {
        // The precondition makes Firestore reject the write if the document
        // is missing, instead of silently creating it.
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::GEAR)
            .precondition(firestore::FirestoreWritePrecondition::Exists(true))
            .document_id(&gear.gear_id)
            .object(gear)
            .execute()
            .await
            .map_err(|e| match e {
                firestore::errors::FirestoreError::DataNotFoundError(_) => {
                    AppError::NotFound(format!("Gear {}", gear.gear_id))
                }
                other => AppError::Database(other.to_string()),
            })?;
        Ok(())
    }
}

#[async_trait]
impl RateLimitTracker for FirestoreDb {
    async fn mark_reached(&self, day: NaiveDate) -> Result<(), AppError> {
        // Keep the first timestamp of the day.
        if self.get_rate_limit_mark(day).await?.is_some() {
            return Ok(());
        }

        let mark = RateLimitMark {
            day: format_day(day),
            reached_at: format_utc_rfc3339(chrono::Utc::now()),
        };

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::RATE_LIMITS)
            .document_id(&mark.day)
            .object(&mark)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn has_been_reached(&self, day: NaiveDate) -> Result<bool, AppError> {
        Ok(self.get_rate_limit_mark(day).await?.is_some())
    }
}
