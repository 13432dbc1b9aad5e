//! Per-connector health tracking.
//!
//! Each connector owns a [`HealthRecord`] guarded by its own mutex. The set of
//! records is fixed when the monitor is built from the registry's names, so
//! updates for different connectors never contend and no global lock exists.
//!
//! State machine (thresholds from [`HealthThresholds`]):
//! - failure: `consecutive_failures += 1`; the connector becomes `Unhealthy` once the
//!   count reaches `unhealthy_after`, or when it was already `Degraded` and the
//!   failure is terminal; otherwise it becomes `Degraded` once the count reaches
//!   `degraded_after`. A failure never improves the status.
//! - success: the count resets to zero and the status returns to `Healthy` at once.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use agora_types::{
    AgoraError, ConnectorName, FetchOutcome, HealthRecord, HealthStatus, HealthSummary,
    HealthThresholds,
};

/// Apply one outcome to a record. Pure with respect to everything but `record`.
pub fn apply_outcome(
    record: &mut HealthRecord,
    outcome: &FetchOutcome,
    thresholds: HealthThresholds,
    now: DateTime<Utc>,
) {
    record.last_latency = Some(outcome.latency());
    match outcome {
        FetchOutcome::Success { .. } => {
            record.consecutive_failures = 0;
            record.status = HealthStatus::Healthy;
            record.last_success_at = Some(now);
            record.total_successes += 1;
        }
        FetchOutcome::Failure { kind, .. } => {
            record.consecutive_failures = record.consecutive_failures.saturating_add(1);
            record.last_failure_at = Some(now);
            record.last_error = Some(*kind);
            record.total_failures += 1;

            let n = record.consecutive_failures;
            let was_degraded = record.status >= HealthStatus::Degraded;
            let next = if n >= thresholds.unhealthy_after || (was_degraded && !kind.is_retryable())
            {
                HealthStatus::Unhealthy
            } else if n >= thresholds.degraded_after {
                HealthStatus::Degraded
            } else {
                HealthStatus::Healthy
            };
            record.status = record.status.max(next);
        }
    }
}

/// Tracks a rolling [`HealthRecord`] per registered connector.
#[derive(Debug)]
pub struct HealthMonitor {
    records: HashMap<ConnectorName, Mutex<HealthRecord>>,
    thresholds: HealthThresholds,
}

impl HealthMonitor {
    /// Create a monitor with a fresh record for every name.
    pub fn new<I>(names: I, thresholds: HealthThresholds) -> Self
    where
        I: IntoIterator<Item = ConnectorName>,
    {
        Self {
            records: names
                .into_iter()
                .map(|n| (n, Mutex::new(HealthRecord::new())))
                .collect(),
            thresholds,
        }
    }

    /// Thresholds driving the state machine.
    #[must_use]
    pub const fn thresholds(&self) -> HealthThresholds {
        self.thresholds
    }

    // A poisoned record is still a valid record; keep serving it.
    fn lock(m: &Mutex<HealthRecord>) -> MutexGuard<'_, HealthRecord> {
        m.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Update a connector's record from a call outcome.
    ///
    /// Bookkeeping is silent: outcomes for unknown connectors are dropped.
    pub fn record(&self, name: &str, outcome: &FetchOutcome) {
        self.record_at(name, outcome, Utc::now());
    }

    /// Same as [`record`](Self::record) with an explicit timestamp.
    pub fn record_at(&self, name: &str, outcome: &FetchOutcome, now: DateTime<Utc>) {
        let Some(slot) = self.records.get(name) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(connector = name, "health update for unknown connector dropped");
            return;
        };
        let mut rec = Self::lock(slot);
        let before = rec.status;
        apply_outcome(&mut rec, outcome, self.thresholds, now);
        if rec.status != before {
            #[cfg(feature = "tracing")]
            tracing::info!(
                connector = name,
                from = %before,
                to = %rec.status,
                consecutive_failures = rec.consecutive_failures,
                "connector health changed"
            );
        }
    }

    /// Current status of a connector.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if the monitor has no record for `name`.
    pub fn status_of(&self, name: &str) -> Result<HealthStatus, AgoraError> {
        self.records
            .get(name)
            .map(|m| Self::lock(m).status)
            .ok_or_else(|| AgoraError::unknown_connector(name))
    }

    /// Copy of a connector's full record.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if the monitor has no record for `name`.
    pub fn record_of(&self, name: &str) -> Result<HealthRecord, AgoraError> {
        self.records
            .get(name)
            .map(|m| Self::lock(m).clone())
            .ok_or_else(|| AgoraError::unknown_connector(name))
    }

    /// Point-in-time copy of every record.
    ///
    /// Records are read one at a time; the snapshot is consistent per connector.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<ConnectorName, HealthRecord> {
        self.records
            .iter()
            .map(|(n, m)| (n.clone(), Self::lock(m).clone()))
            .collect()
    }

    /// Count connectors per status.
    #[must_use]
    pub fn summary(&self) -> HealthSummary {
        self.snapshot().values().collect()
    }

    /// Reset a connector to a fresh healthy record.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if the monitor has no record for `name`.
    pub fn reset(&self, name: &str) -> Result<(), AgoraError> {
        let slot = self
            .records
            .get(name)
            .ok_or_else(|| AgoraError::unknown_connector(name))?;
        *Self::lock(slot) = HealthRecord::new();
        Ok(())
    }
}
