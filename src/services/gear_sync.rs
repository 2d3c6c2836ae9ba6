// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear import.
//!
//! Handles the core workflow:
//! 1. Collect every gear ID referenced by stored activities
//! 2. Fetch each gear from Strava, one at a time
//! 3. Create or update the local gear record
//! 4. Pause between calls to stay under the Strava quota
//!
//! When Strava answers with a quota status the run stops early, the day is
//! marked as rate limited, and the run still counts as a success. Gear stored
//! before the stop is kept.

use crate::db::{ActivityRepository, GearRepository, RateLimitTracker};
use crate::error::Result;
use crate::models::Gear;
use crate::output::Output;
use crate::services::strava::{GearClient, StravaGear};
use crate::services::throttle::Throttle;
use crate::time_utils::{format_day, Clock};
use std::sync::Arc;
use std::time::Duration;

/// Default pause after each fetched gear.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_secs(10);

pub const RATE_LIMIT_WARNING: &str =
    "You probably reached Strava API rate limits. You will need to import the rest of your activities tomorrow";

/// How a run ended. Both are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every referenced gear was fetched and stored.
    Completed,
    /// Strava reported quota exhaustion; remaining gear was skipped.
    PartiallyStoppedByRateLimit,
}

/// What happened to one gear record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Created,
    Updated,
}

/// Mirrors Strava gear into the local store.
pub struct GearSynchronizer {
    strava: Arc<dyn GearClient>,
    activities: Arc<dyn ActivityRepository>,
    gear: Arc<dyn GearRepository>,
    rate_limit: Arc<dyn RateLimitTracker>,
    clock: Arc<dyn Clock>,
    throttle: Arc<dyn Throttle>,
    output: Arc<dyn Output>,
    throttle_interval: Duration,
}

impl GearSynchronizer {
    pub fn new(
        strava: Arc<dyn GearClient>,
        activities: Arc<dyn ActivityRepository>,
        gear: Arc<dyn GearRepository>,
        rate_limit: Arc<dyn RateLimitTracker>,
        clock: Arc<dyn Clock>,
        throttle: Arc<dyn Throttle>,
        output: Arc<dyn Output>,
    ) -> Self {
        Self {
            strava,
            activities,
            gear,
            rate_limit,
            clock,
            throttle,
            output,
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
        }
    }

    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    /// Run one import pass unless the Strava quota was already hit today.
    ///
    /// Returns `Ok(None)` without touching Strava when today is marked.
    pub async fn synchronize_unless_limited(&self) -> Result<Option<RunOutcome>> {
        let today = self.clock.today();
        if self.rate_limit.has_been_reached(today).await? {
            tracing::info!(day = %format_day(today), "Strava quota already reached today, skipping");
            self.output
                .writeln("Strava API rate limit was reached earlier today, skipping gear import");
            return Ok(None);
        }

        self.synchronize().await.map(Some)
    }

    /// Run one import pass.
    ///
    /// Gear IDs are processed sequentially in sorted order. Any error other
    /// than a recognized quota status aborts the run and is returned as-is.
    pub async fn synchronize(&self) -> Result<RunOutcome> {
        self.output.writeln("Importing gear...");

        let gear_ids = self.activities.find_unique_gear_ids().await?;
        tracing::info!(count = gear_ids.len(), "Starting gear import");

        for gear_id in &gear_ids {
            let strava_gear = match self.strava.get_gear(gear_id).await {
                Ok(strava_gear) => strava_gear,
                Err(err) => {
                    let Some(status) = err.rate_limit_status() else {
                        return Err(err);
                    };

                    // Lets later runs skip today and resume tomorrow.
                    self.rate_limit.mark_reached(self.clock.today()).await?;
                    tracing::warn!(
                        gear_id = %gear_id,
                        status = status.as_u16(),
                        "Strava quota reached, stopping gear import"
                    );
                    self.output.writeln(RATE_LIMIT_WARNING);

                    return Ok(RunOutcome::PartiallyStoppedByRateLimit);
                }
            };

            let (gear, action) = self.upsert(gear_id, &strava_gear).await?;
            tracing::info!(gear_id = %gear_id, ?action, "Imported gear");
            self.output
                .writeln(&format!("  => Imported/updated gear \"{}\"", gear.name));

            self.throttle.pause(self.throttle_interval).await;
        }

        tracing::info!(count = gear_ids.len(), "Gear import completed");
        Ok(RunOutcome::Completed)
    }

    /// Create the gear if it is new, otherwise refresh its mutable fields.
    async fn upsert(&self, gear_id: &str, strava_gear: &StravaGear) -> Result<(Gear, UpsertAction)> {
        match self.gear.find_gear(gear_id).await? {
            Some(mut gear) => {
                let converted_distance = strava_gear
                    .converted_distance
                    .unwrap_or(gear.converted_distance);
                gear.update_distance(strava_gear.distance, converted_distance)?
                    .update_is_retired(strava_gear.is_retired());
                self.gear.update_gear(&gear).await?;
                Ok((gear, UpsertAction::Updated))
            }
            None => {
                let gear = Gear::create(
                    gear_id,
                    strava_gear.name.as_deref(),
                    strava_gear.distance,
                    strava_gear.converted_distance.unwrap_or(0.0),
                    strava_gear.is_retired(),
                    self.clock.now(),
                )?;
                self.gear.add_gear(&gear).await?;
                Ok((gear, UpsertAction::Created))
            }
        }
    }
}
