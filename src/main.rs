// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear import job
//!
//! Runs one pass of the Strava gear import against Firestore and exits.
//! Meant to be scheduled daily; a day on which the Strava quota was already
//! hit is skipped.

use anyhow::Context;
use std::sync::Arc;
use strava_gear_sync::{
    config::Config,
    db::FirestoreDb,
    output::ConsoleOutput,
    services::{GearSynchronizer, RunOutcome, StravaClient, TokioThrottle},
    time_utils::SystemClock,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging for GCP
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(project = %config.gcp_project_id, "Starting gear import");

    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .context("Failed to connect to Firestore")?;
    let strava = StravaClient::new(config.strava_access_token.clone())
        .with_base_url(config.strava_api_base_url.clone());
    let db = Arc::new(db);

    let synchronizer = GearSynchronizer::new(
        Arc::new(strava),
        db.clone(),
        db.clone(),
        db,
        Arc::new(SystemClock),
        Arc::new(TokioThrottle),
        Arc::new(ConsoleOutput),
    )
    .with_throttle_interval(config.gear_throttle);

    match synchronizer.synchronize_unless_limited().await {
        Ok(Some(RunOutcome::Completed)) => tracing::info!("Gear import finished"),
        Ok(Some(RunOutcome::PartiallyStoppedByRateLimit)) => {
            tracing::warn!("Gear import stopped early by Strava rate limit")
        }
        Ok(None) => tracing::info!("Gear import skipped"),
        Err(e) => {
            tracing::error!(error = %e, "Gear import failed");
            return Err(e.into());
        }
    }

    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_gear_sync=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
