// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore gear persistence, against the emulator.
//!
//! Skipped unless FIRESTORE_EMULATOR_HOST is set.

use chrono::{TimeZone, Utc};
use strava_gear_sync::db::{GearRepository, RateLimitTracker};
use strava_gear_sync::error::AppError;
use strava_gear_sync::models::Gear;

mod common;
use common::test_db;

fn gear(id: &str, distance: f64) -> Gear {
    Gear::create(
        id,
        Some("Emulator Bike"),
        distance,
        distance / 1000.0,
        false,
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    )
    .unwrap()
}

fn unique_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn test_update_missing_gear_is_not_found() {
    require_emulator!();
    let db = test_db().await;
    let id = unique_id("missing");

    let result = db.update_gear(&gear(&id, 100.0)).await;

    assert!(
        matches!(result, Err(AppError::NotFound(_))),
        "update must not create gear: {:?}",
        result
    );
    assert!(db.find_gear(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_then_update_gear() {
    require_emulator!();
    let db = test_db().await;
    let id = unique_id("b");

    db.add_gear(&gear(&id, 100.0)).await.unwrap();
    assert!(db.add_gear(&gear(&id, 200.0)).await.is_err(), "add rejects duplicates");

    let mut updated = gear(&id, 300.0);
    updated.update_is_retired(true);
    db.update_gear(&updated).await.unwrap();

    let stored = db.find_gear(&id).await.unwrap().unwrap();
    assert_eq!(stored.distance_in_meter, 300.0);
    assert!(stored.is_retired);
    assert_eq!(stored.created_on, updated.created_on);
}

#[tokio::test]
async fn test_rate_limit_mark_roundtrip() {
    require_emulator!();
    let db = test_db().await;
    let day = chrono::NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();

    db.mark_reached(day).await.unwrap();

    assert!(db.has_been_reached(day).await.unwrap());
}
