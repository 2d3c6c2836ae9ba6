// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Delay between outbound Strava calls.

use async_trait::async_trait;
use std::time::Duration;

/// Pause between remote calls. Injected so tests can skip the wait.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioThrottle;

#[async_trait]
impl Throttle for TokioThrottle {
    async fn pause(&self, duration: Duration) {
        tracing::debug!(secs = duration.as_secs_f64(), "Throttling Strava calls");
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_throttle_waits_full_duration() {
        let start = tokio::time::Instant::now();
        TokioThrottle.pause(Duration::from_secs(10)).await;
        assert!(start.elapsed() >= Duration::from_secs(10));
    }
}
