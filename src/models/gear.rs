// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Gear (bikes, shoes) mirrored from Strava.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored gear record in Firestore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    /// Strava gear ID, e.g. "b123" (also used as document ID)
    pub gear_id: String,
    /// Display name, taken from Strava on first import
    pub name: String,
    /// Accumulated distance in meters
    pub distance_in_meter: f64,
    /// Distance as converted by Strava to the athlete's units
    pub converted_distance: f64,
    /// Whether the athlete has retired this gear
    pub is_retired: bool,
    /// When this record was first created; never changed afterwards
    pub created_on: DateTime<Utc>,
}

impl Gear {
    /// Build a new gear record. An empty name falls back to the gear ID.
    pub fn create(
        gear_id: &str,
        name: Option<&str>,
        distance_in_meter: f64,
        converted_distance: f64,
        is_retired: bool,
        created_on: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        validate_distance(gear_id, "distance", distance_in_meter)?;
        validate_distance(gear_id, "converted_distance", converted_distance)?;

        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => gear_id.to_string(),
        };

        Ok(Self {
            gear_id: gear_id.to_string(),
            name,
            distance_in_meter,
            converted_distance,
            is_retired,
            created_on,
        })
    }

    /// Replace both distances. Leaves the record untouched on invalid input.
    pub fn update_distance(
        &mut self,
        distance_in_meter: f64,
        converted_distance: f64,
    ) -> Result<&mut Self, AppError> {
        validate_distance(&self.gear_id, "distance", distance_in_meter)?;
        validate_distance(&self.gear_id, "converted_distance", converted_distance)?;
        self.distance_in_meter = distance_in_meter;
        self.converted_distance = converted_distance;
        Ok(self)
    }

    pub fn update_is_retired(&mut self, is_retired: bool) -> &mut Self {
        self.is_retired = is_retired;
        self
    }
}

fn validate_distance(gear_id: &str, field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidPayload(format!(
            "gear {}: {} must be a non-negative number, got {}",
            gear_id, field, value
        )))
    }
}
