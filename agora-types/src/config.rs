//! Configuration types shared by the orchestrator and its components.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::DataKind;
use crate::connector::ConnectorName;
use crate::error::AgoraError;
use crate::health::HealthThresholds;

/// Default relative tolerance for cross-source comparisons (1%).
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Global configuration for the `Agora` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Timeout for each individual connector call.
    pub provider_timeout: Duration,
    /// Relative deviation below which cross-source values count as consistent.
    pub tolerance: f64,
    /// Health state machine thresholds.
    pub health: HealthThresholds,
    /// Static routing overrides.
    ///
    /// - When a kind is listed, only the named connectors may serve it (and only if
    ///   they advertise the capability).
    /// - Kinds not listed are served by every connector advertising the capability.
    /// - Unknown connector names are rejected during `agora`'s build step.
    pub routes: BTreeMap<DataKind, Vec<ConnectorName>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            tolerance: DEFAULT_TOLERANCE,
            health: HealthThresholds::default(),
            routes: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Check internal consistency of the configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a zero timeout, a non-finite or non-positive
    /// tolerance, or inconsistent health thresholds.
    pub fn validate(&self) -> Result<(), AgoraError> {
        if self.provider_timeout.is_zero() {
            return Err(AgoraError::InvalidConfig(
                "provider_timeout must be greater than zero".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AgoraError::InvalidConfig(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        if self.health.degraded_after == 0 {
            return Err(AgoraError::InvalidConfig(
                "health.degraded_after must be at least 1".into(),
            ));
        }
        if self.health.unhealthy_after < self.health.degraded_after {
            return Err(AgoraError::InvalidConfig(format!(
                "health.unhealthy_after ({}) must not be lower than health.degraded_after ({})",
                self.health.unhealthy_after, self.health.degraded_after
            )));
        }
        Ok(())
    }
}
