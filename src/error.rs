// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid activity type: {0:?}")]
    InvalidActivityType(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Strava API error: {0}")]
    StravaApi(#[from] StravaError),

    #[error("Database error: {0}")]
    Database(String),
}

/// Failure talking to the Strava API.
#[derive(Debug, thiserror::Error)]
pub enum StravaError {
    /// Non-2xx response.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// 2xx response with a body we could not parse.
    #[error("JSON parse error: {0}")]
    Decode(String),
}

/// Status codes Strava returns when the usage quota is exhausted or the
/// service is temporarily unable to serve us. Retrying the same day is
/// pointless; the import resumes on a later run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum StravaErrorStatusCode {
    TooManyRequests = 429,
    InternalServerError = 500,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
}

impl StravaErrorStatusCode {
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            429 => Some(Self::TooManyRequests),
            500 => Some(Self::InternalServerError),
            502 => Some(Self::BadGateway),
            503 => Some(Self::ServiceUnavailable),
            504 => Some(Self::GatewayTimeout),
            _ => None,
        }
    }

    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl AppError {
    /// The recognized quota status carried by this error, if any.
    ///
    /// Only HTTP responses count: a transport failure has no status and is
    /// never treated as a rate limit.
    pub fn rate_limit_status(&self) -> Option<StravaErrorStatusCode> {
        match self {
            AppError::StravaApi(StravaError::Http { status, .. }) => {
                StravaErrorStatusCode::from_status(*status)
            }
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit_status().is_some()
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AppError>;
