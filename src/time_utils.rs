// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting, plus the clock used for
//! creation timestamps.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Source of the current time. Injected so tests can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a day as `YYYY-MM-DD`, the document ID of daily markers.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_helpers() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 1).unwrap();
        assert_eq!(format_utc_rfc3339(ts), "2024-03-05T23:59:01Z");
        assert_eq!(format_day(ts.date_naive()), "2024-03-05");
    }
}
