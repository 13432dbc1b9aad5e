//! Connector health records and thresholds.

use core::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::outcome::ErrorKind;

/// Operational status of a connector, ordered by routing preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    /// Recent calls succeed.
    #[default]
    Healthy,
    /// Several consecutive failures.
    Degraded,
    /// Many consecutive failures, or a terminal failure after already being degraded.
    Unhealthy,
}

impl HealthStatus {
    /// Stable identifier for logs and health reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rolling health state of one connector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Current status.
    pub status: HealthStatus,
    /// Failures since the last success.
    pub consecutive_failures: u32,
    /// Time of the last successful call.
    pub last_success_at: Option<DateTime<Utc>>,
    /// Time of the last failed call.
    pub last_failure_at: Option<DateTime<Utc>>,
    /// Latency of the most recent call.
    pub last_latency: Option<Duration>,
    /// Failure class of the most recent failed call.
    pub last_error: Option<ErrorKind>,
    /// Lifetime count of successful calls.
    pub total_successes: u64,
    /// Lifetime count of failed calls.
    pub total_failures: u64,
}

impl HealthRecord {
    /// Fresh record: healthy, no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Consecutive-failure thresholds driving status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Failures after which a healthy connector becomes degraded.
    pub degraded_after: u32,
    /// Failures after which a connector becomes unhealthy.
    pub unhealthy_after: u32,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            degraded_after: 3,
            unhealthy_after: 6,
        }
    }
}

/// Number of connectors per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Connectors currently healthy.
    pub healthy: usize,
    /// Connectors currently degraded.
    pub degraded: usize,
    /// Connectors currently unhealthy.
    pub unhealthy: usize,
}

impl HealthSummary {
    /// Total connectors counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.healthy + self.degraded + self.unhealthy
    }
}

impl<'a> FromIterator<&'a HealthRecord> for HealthSummary {
    fn from_iter<I: IntoIterator<Item = &'a HealthRecord>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                HealthStatus::Healthy => acc.healthy += 1,
                HealthStatus::Degraded => acc.degraded += 1,
                HealthStatus::Unhealthy => acc.unhealthy += 1,
            }
            acc
        })
    }
}
