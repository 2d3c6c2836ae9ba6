// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod activity_type;
pub mod gear;
pub mod rate_limit;

pub use activity::Activity;
pub use activity_type::{ActivityType, Capabilities};
pub use gear::Gear;
pub use rate_limit::RateLimitMark;
