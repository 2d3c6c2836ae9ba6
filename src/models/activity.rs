// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Imported Strava activity, as far as gear reconciliation needs it.

use crate::error::AppError;
use crate::models::ActivityType;
use serde::{Deserialize, Serialize};

/// Stored activity record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID (also used as document ID)
    pub strava_activity_id: u64,
    /// Activity name/title
    pub name: String,
    /// Sport type label (Ride, VirtualRide, Run)
    pub sport_type: String,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    /// Distance in meters
    pub distance_meters: f64,
    /// Gear used, if the athlete assigned one
    #[serde(default)]
    pub gear_id: Option<String>,
}

impl Activity {
    /// Classify the stored sport type label.
    pub fn activity_type(&self) -> Result<ActivityType, AppError> {
        self.sport_type.parse()
    }

    /// Gear ID, ignoring blank values.
    pub fn gear_id(&self) -> Option<&str> {
        self.gear_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}
