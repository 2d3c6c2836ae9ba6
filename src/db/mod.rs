// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore, plus an in-memory store with the same semantics).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::Result;
use crate::models::Gear;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
    pub const GEAR: &str = "gear";
    /// Daily quota markers (keyed by `YYYY-MM-DD`)
    pub const RATE_LIMITS: &str = "rate_limits";
}

/// Read access to imported activities.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Every gear ID referenced by at least one stored activity.
    ///
    /// Sorted, so iteration order is stable within and across runs.
    async fn find_unique_gear_ids(&self) -> Result<BTreeSet<String>>;
}

/// Gear persistence.
#[async_trait]
pub trait GearRepository: Send + Sync {
    /// Look up gear by ID. `Ok(None)` when absent.
    async fn find_gear(&self, gear_id: &str) -> Result<Option<Gear>>;

    /// Store a new gear record. Fails if the ID already exists.
    async fn add_gear(&self, gear: &Gear) -> Result<()>;

    /// Overwrite an existing gear record. Fails if the ID does not exist.
    async fn update_gear(&self, gear: &Gear) -> Result<()>;
}

/// Per-day record of the Strava quota being exhausted.
///
/// The gear import only writes it; the binary reads it before starting a
/// run so a run on the same day is skipped.
#[async_trait]
pub trait RateLimitTracker: Send + Sync {
    async fn mark_reached(&self, day: NaiveDate) -> Result<()>;

    async fn has_been_reached(&self, day: NaiveDate) -> Result<bool>;
}
