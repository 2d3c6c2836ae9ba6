// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Marker that the Strava API quota was exhausted on a given day.

use serde::{Deserialize, Serialize};

/// One document per UTC day on which the quota was hit.
///
/// Absence means the quota has not been hit that day; the mark for a day
/// stops mattering once the day is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitMark {
    /// UTC day, `YYYY-MM-DD` (also used as document ID)
    pub day: String,
    /// When the quota was first hit (RFC3339)
    pub reached_at: String,
}
