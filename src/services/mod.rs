// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod gear_sync;
pub mod strava;
pub mod throttle;

pub use gear_sync::{GearSynchronizer, RunOutcome, UpsertAction};
pub use strava::{GearClient, StravaClient, StravaGear};
pub use throttle::{Throttle, TokioThrottle};
