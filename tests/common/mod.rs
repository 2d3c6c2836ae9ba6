// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strava_gear_sync::db::{FirestoreDb, MemoryDb};
use strava_gear_sync::error::{AppError, StravaError};
use strava_gear_sync::models::Activity;
use strava_gear_sync::output::Output;
use strava_gear_sync::services::{GearClient, GearSynchronizer, StravaGear, Throttle};
use strava_gear_sync::time_utils::Clock;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Scripted Strava response for one gear ID.
#[derive(Clone)]
#[allow(dead_code)]
pub enum GearResponse {
    Ok(StravaGear),
    Status(u16),
    Transport,
}

/// Gear client that replays scripted responses and records every call.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeGearClient {
    responses: Mutex<HashMap<String, GearResponse>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeGearClient {
    pub fn respond(&self, gear_id: &str, response: GearResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(gear_id.to_string(), response);
    }

    pub fn respond_ok(&self, gear_id: &str, gear: StravaGear) {
        self.respond(gear_id, GearResponse::Ok(gear));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GearClient for FakeGearClient {
    async fn get_gear(&self, gear_id: &str) -> Result<StravaGear, AppError> {
        self.calls.lock().unwrap().push(gear_id.to_string());
        let response = self.responses.lock().unwrap().get(gear_id).cloned();
        match response {
            Some(GearResponse::Ok(gear)) => Ok(gear),
            Some(GearResponse::Status(status)) => Err(StravaError::Http {
                status,
                body: "{\"message\":\"error\"}".to_string(),
            }
            .into()),
            Some(GearResponse::Transport) => {
                Err(StravaError::Transport("connection reset".to_string()).into())
            }
            None => Err(StravaError::Http {
                status: 404,
                body: "Record Not Found".to_string(),
            }
            .into()),
        }
    }
}

/// Throttle that records pauses instead of sleeping.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingThrottle {
    pauses: Mutex<Vec<Duration>>,
}

#[allow(dead_code)]
impl RecordingThrottle {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Throttle for RecordingThrottle {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// Clock that returns whatever it was last set to.
#[allow(dead_code)]
pub struct FixedClock(Mutex<DateTime<Utc>>);

#[allow(dead_code)]
impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Output sink that keeps every line.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingOutput {
    lines: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingOutput {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Output for RecordingOutput {
    fn writeln(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Everything a synchronizer test needs, wired together.
#[allow(dead_code)]
pub struct Harness {
    pub db: MemoryDb,
    pub strava: Arc<FakeGearClient>,
    pub clock: Arc<FixedClock>,
    pub throttle: Arc<RecordingThrottle>,
    pub output: Arc<RecordingOutput>,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self {
            db: MemoryDb::new(),
            strava: Arc::new(FakeGearClient::default()),
            clock: Arc::new(FixedClock::new(
                Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            )),
            throttle: Arc::new(RecordingThrottle::default()),
            output: Arc::new(RecordingOutput::default()),
        }
    }

    pub fn synchronizer(&self) -> GearSynchronizer {
        let db = Arc::new(self.db.clone());
        GearSynchronizer::new(
            self.strava.clone(),
            db.clone(),
            db.clone(),
            db,
            self.clock.clone(),
            self.throttle.clone(),
            self.output.clone(),
        )
    }

    pub fn clock_today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Store an activity that uses the given gear.
    pub fn add_activity(&self, activity_id: u64, gear_id: Option<&str>) {
        self.db.set_activity(make_activity(activity_id, "Ride", gear_id));
    }
}

#[allow(dead_code)]
pub fn make_activity(id: u64, sport: &str, gear_id: Option<&str>) -> Activity {
    Activity {
        strava_activity_id: id,
        name: format!("Test Activity {}", id),
        sport_type: sport.to_string(),
        start_date: "2024-01-10T08:00:00Z".to_string(),
        distance_meters: 25000.0,
        gear_id: gear_id.map(String::from),
    }
}

#[allow(dead_code)]
pub fn strava_gear(distance: f64, converted_distance: f64, retired: Option<bool>) -> StravaGear {
    StravaGear {
        id: None,
        name: None,
        distance,
        converted_distance: Some(converted_distance),
        retired,
    }
}
