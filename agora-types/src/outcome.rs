//! Per-call outcomes and the failure taxonomy connectors must use.

use core::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::Payload;

/// Classification of a failed connector call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The call exceeded the per-call timeout.
    Timeout,
    /// The provider throttled the request.
    RateLimited,
    /// The provider does not know the symbol or series.
    NotFound,
    /// The provider failed (5xx, network error, ...).
    UpstreamError,
    /// The provider answered with data that could not be interpreted.
    Malformed,
}

impl ErrorKind {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::RateLimited => "rate-limited",
            Self::NotFound => "not-found",
            Self::UpstreamError => "upstream-error",
            Self::Malformed => "malformed",
        }
    }

    /// Whether repeating the request later may succeed.
    ///
    /// `NotFound` and `Malformed` are terminal: the same request will fail the same way.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Timeout | Self::RateLimited | Self::UpstreamError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified failure returned by a connector.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct FetchError {
    /// Failure class.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl FetchError {
    /// Build an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Helper: build a `Timeout` error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Helper: build a `RateLimited` error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimited, message)
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, what)
    }

    /// Helper: build an `UpstreamError` error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamError, message)
    }

    /// Helper: build a `Malformed` error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed, message)
    }
}

/// Result of one (connector, request) call. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FetchOutcome {
    /// The connector returned a payload.
    Success {
        /// Returned data.
        payload: Payload,
        /// Wall time spent in the call.
        latency: Duration,
    },
    /// The connector failed or timed out.
    Failure {
        /// Failure class.
        kind: ErrorKind,
        /// Human-readable detail.
        message: String,
        /// Wall time spent in the call.
        latency: Duration,
    },
}

impl FetchOutcome {
    /// Build a success outcome.
    #[must_use]
    pub const fn success(payload: Payload, latency: Duration) -> Self {
        Self::Success { payload, latency }
    }

    /// Build a failure outcome from a classified error.
    #[must_use]
    pub fn failure(err: FetchError, latency: Duration) -> Self {
        Self::Failure {
            kind: err.kind,
            message: err.message,
            latency,
        }
    }

    /// Whether this outcome carries a payload.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Time spent in the call, regardless of result.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        match self {
            Self::Success { latency, .. } | Self::Failure { latency, .. } => *latency,
        }
    }

    /// Payload of a successful outcome.
    #[must_use]
    pub const fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// Failure class of a failed outcome.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<(Result<Payload, FetchError>, Duration)> for FetchOutcome {
    fn from((res, latency): (Result<Payload, FetchError>, Duration)) -> Self {
        match res {
            Ok(payload) => Self::success(payload, latency),
            Err(e) => Self::failure(e, latency),
        }
    }
}
