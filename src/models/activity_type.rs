// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Closed set of activity types and the capabilities derived from them.
//!
//! Import code uses these flags to decide which activities get weather and
//! reverse-geocoding enrichment, and which count towards ride or run totals.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity type as reported by Strava's `sport_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "Ride")]
    Ride,
    #[serde(rename = "VirtualRide")]
    VirtualRide,
    #[serde(rename = "Run")]
    Run,
}

/// Capability flags for one activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub supports_weather: bool,
    pub supports_reverse_geocoding: bool,
    pub is_virtual: bool,
    pub is_ride: bool,
    pub is_run: bool,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Ride,
        ActivityType::VirtualRide,
        ActivityType::Run,
    ];

    /// The Strava label for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ActivityType::Ride => "Ride",
            ActivityType::VirtualRide => "VirtualRide",
            ActivityType::Run => "Run",
        }
    }

    /// Capability table, keyed by variant.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            ActivityType::Ride => Capabilities {
                supports_weather: true,
                supports_reverse_geocoding: true,
                is_virtual: false,
                is_ride: true,
                is_run: false,
            },
            ActivityType::VirtualRide => Capabilities {
                supports_weather: false,
                supports_reverse_geocoding: false,
                is_virtual: true,
                is_ride: true,
                is_run: false,
            },
            ActivityType::Run => Capabilities {
                supports_weather: true,
                supports_reverse_geocoding: true,
                is_virtual: false,
                is_ride: false,
                is_run: true,
            },
        }
    }

    pub const fn supports_weather(self) -> bool {
        self.capabilities().supports_weather
    }

    pub const fn supports_reverse_geocoding(self) -> bool {
        self.capabilities().supports_reverse_geocoding
    }

    pub const fn is_virtual(self) -> bool {
        self.capabilities().is_virtual
    }

    pub const fn is_ride(self) -> bool {
        self.capabilities().is_ride
    }

    pub const fn is_run(self) -> bool {
        self.capabilities().is_run
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    /// Parse a Strava label. Unknown labels are rejected, never defaulted.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == label)
            .ok_or_else(|| AppError::InvalidActivityType(label.to_string()))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
