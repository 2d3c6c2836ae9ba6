// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava gear sync: mirror Strava gear into Firestore
//!
//! This crate fetches the gear referenced by imported Strava activities,
//! keeps local gear records up to date, and backs off for the day once
//! Strava reports that the API quota is used up.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
pub mod time_utils;
