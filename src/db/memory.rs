// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store with the same semantics as [`FirestoreDb`](super::FirestoreDb).
//!
//! Used by tests and for embedding the import without a Firestore project.

use crate::db::{ActivityRepository, GearRepository, RateLimitTracker};
use crate::error::AppError;
use crate::models::{Activity, Gear, RateLimitMark};
use crate::time_utils::{format_day, format_utc_rfc3339};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Cheaply cloneable handle; clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    activities: Arc<DashMap<u64, Activity>>,
    gear: Arc<DashMap<String, Gear>>,
    rate_limits: Arc<DashMap<String, RateLimitMark>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an activity (insert or replace).
    pub fn set_activity(&self, activity: Activity) {
        self.activities.insert(activity.strava_activity_id, activity);
    }

    /// Snapshot of one gear record.
    pub fn get_gear(&self, gear_id: &str) -> Option<Gear> {
        self.gear.get(gear_id).map(|g| g.clone())
    }

    /// Snapshot of all gear records, sorted by ID.
    pub fn all_gear(&self) -> Vec<Gear> {
        let mut gear: Vec<Gear> = self.gear.iter().map(|g| g.value().clone()).collect();
        gear.sort_by(|a, b| a.gear_id.cmp(&b.gear_id));
        gear
    }
}

#[async_trait]
impl ActivityRepository for MemoryDb {
    async fn find_unique_gear_ids(&self) -> Result<BTreeSet<String>, AppError> {
        Ok(self
            .activities
            .iter()
            .filter_map(|a| a.gear_id().map(str::to_string))
            .collect())
    }
}

#[async_trait]
impl GearRepository for MemoryDb {
    async fn find_gear(&self, gear_id: &str) -> Result<Option<Gear>, AppError> {
        Ok(self.get_gear(gear_id))
    }

    async fn add_gear(&self, gear: &Gear) -> Result<(), AppError> {
        match self.gear.entry(gear.gear_id.clone()) {
            Entry::Occupied(_) => Err(AppError::Database(format!(
                "Gear {} already exists",
                gear.gear_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(gear.clone());
                Ok(())
            }
        }
    }

    async fn update_gear(&self, gear: &Gear) -> Result<(), AppError> {
        match self.gear.get_mut(&gear.gear_id) {
            Some(mut existing) => {
                *existing = gear.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Gear {}", gear.gear_id))),
        }
    }
}

#[async_trait]
impl RateLimitTracker for MemoryDb {
    async fn mark_reached(&self, day: NaiveDate) -> Result<(), AppError> {
        let key = format_day(day);
        self.rate_limits
            .entry(key.clone())
            .or_insert_with(|| RateLimitMark {
                day: key,
                reached_at: format_utc_rfc3339(chrono::Utc::now()),
            });
        Ok(())
    }

    async fn has_been_reached(&self, day: NaiveDate) -> Result<bool, AppError> {
        Ok(self.rate_limits.contains_key(&format_day(day)))
    }
}
