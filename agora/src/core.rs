use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use agora_core::{
    AgoraError, Connector, ConnectorName, ConnectorRegistry, CrossSourceValidator, DataKind,
    EngineConfig, FetchError, FetchOutcome, FetchRequest, HealthMonitor, HealthRecord,
    HealthStatus, HealthSummary, HealthThresholds, Payload,
};

use crate::router::select::DataTypeRouter;

/// Orchestrator that fans requests out across registered connectors.
///
/// Owns the connector registry, the routing table, the health monitor and the
/// validator. Everything except health is immutable after [`AgoraBuilder::build`];
/// reconfiguring means building a new instance.
pub struct Agora {
    pub(crate) registry: ConnectorRegistry,
    pub(crate) router: DataTypeRouter,
    pub(crate) health: HealthMonitor,
    pub(crate) validator: CrossSourceValidator,
    pub(crate) cfg: EngineConfig,
}

/// Builder for constructing an `Agora` orchestrator with custom configuration.
pub struct AgoraBuilder {
    connectors: Vec<(Option<ConnectorName>, Arc<dyn Connector>)>,
    cfg: EngineConfig,
}

impl Default for AgoraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgoraBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via [`with_connector`](Self::with_connector).
    /// Defaults: 5s per-call timeout, 1% tolerance, degraded after 3 consecutive
    /// failures and unhealthy after 6, routing by capabilities only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: EngineConfig::default(),
        }
    }

    /// Register a connector under its own [`Connector::name`].
    ///
    /// Registration order breaks routing ties between equally healthy connectors.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn Connector>) -> Self {
        self.connectors.push((None, c));
        self
    }

    /// Register a connector under an explicit name.
    ///
    /// Useful for registering the same adapter twice with different settings.
    #[must_use]
    pub fn with_named_connector(
        mut self,
        name: impl Into<ConnectorName>,
        c: Arc<dyn Connector>,
    ) -> Self {
        self.connectors.push((Some(name.into()), c));
        self
    }

    /// Replace the whole configuration.
    ///
    /// Later builder calls still apply on top of it.
    #[must_use]
    pub fn config(mut self, cfg: EngineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-call timeout applied to every connector call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the relative tolerance used by cross-source validation.
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.cfg.tolerance = tolerance;
        self
    }

    /// Set the failure counts at which connectors become degraded/unhealthy.
    #[must_use]
    pub const fn health_thresholds(mut self, thresholds: HealthThresholds) -> Self {
        self.cfg.health = thresholds;
        self
    }

    /// Restrict which connectors may serve `kind`.
    ///
    /// The listed connectors must still declare the kind in their capabilities.
    /// Every name must be registered by the time [`build`](Self::build) runs.
    #[must_use]
    pub fn route(mut self, kind: DataKind, names: &[&str]) -> Self {
        self.cfg
            .routes
            .insert(kind, names.iter().map(|n| ConnectorName::from(*n)).collect());
        self
    }

    /// Build the `Agora` orchestrator.
    ///
    /// # Errors
    /// - `InvalidConfig` if no connectors were registered or the configuration is
    ///   inconsistent (zero timeout, bad tolerance, bad thresholds).
    /// - `DuplicateConnector` if two connectors share a name.
    /// - `UnknownConnector` if a route names an unregistered connector.
    pub fn build(self) -> Result<Agora, AgoraError> {
        self.cfg.validate()?;
        if self.connectors.is_empty() {
            return Err(AgoraError::InvalidConfig(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        let mut registry = ConnectorRegistry::new();
        for (name, c) in self.connectors {
            let name = name.unwrap_or_else(|| ConnectorName::from(c.name()));
            registry.register(name, c)?;
        }

        let router = DataTypeRouter::new(&registry, &self.cfg.routes)?;
        let health = HealthMonitor::new(registry.list_names(), self.cfg.health);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "agora::core",
            connectors = registry.len(),
            timeout_ms = u64::try_from(self.cfg.provider_timeout.as_millis()).unwrap_or(u64::MAX),
            tolerance = self.cfg.tolerance,
            "agora built"
        );

        Ok(Agora {
            registry,
            router,
            health,
            validator: CrossSourceValidator::new(self.cfg.tolerance),
            cfg: self.cfg,
        })
    }
}

impl Agora {
    /// Wrap a connector future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "agora::router",
            name = "agora::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = %connector,
                kind = %kind,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector: &ConnectorName,
        kind: DataKind,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, FetchError>
    where
        Fut: core::future::Future<Output = Result<T, FetchError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "agora::router", connector = %connector, "connector call timed out");
            Err(FetchError::timeout(format!(
                "{connector} did not answer {kind} within {timeout:?}"
            )))
        })
    }

    /// Perform one bounded call, classify it and record it with the health monitor.
    ///
    /// Health is recorded here, inside the per-call future, so dropping the caller
    /// drops any pending bookkeeping with it.
    pub(crate) async fn dispatch(
        &self,
        name: &ConnectorName,
        connector: &Arc<dyn Connector>,
        req: &FetchRequest,
    ) -> FetchOutcome {
        let start = tokio::time::Instant::now();
        let res = Self::provider_call_with_timeout(
            name,
            req.kind(),
            self.cfg.provider_timeout,
            connector.fetch(req),
        )
        .await
        .and_then(|p| check_kind(req.kind(), p));
        let outcome = FetchOutcome::from((res, start.elapsed()));
        self.health.record(name.as_str(), &outcome);
        outcome
    }

    /// Start building a new `Agora` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use agora::{Agora, DataKind};
    ///
    /// let agora = Agora::builder()
    ///     .with_connector(Arc::new(YahooConnector::default()))
    ///     .with_connector(Arc::new(FredConnector::with_key("...")))
    ///     .route(DataKind::EconomicIndicator, &["fred"])
    ///     .provider_timeout(std::time::Duration::from_secs(3))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> AgoraBuilder {
        AgoraBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Registered connector names in registration order.
    #[must_use]
    pub fn list_connectors(&self) -> Vec<ConnectorName> {
        self.registry.list_names()
    }

    /// Look up a registered connector.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if nothing is registered under `name`.
    pub fn connector(&self, name: &str) -> Result<&Arc<dyn Connector>, AgoraError> {
        self.registry.get(name)
    }

    /// Point-in-time copy of every connector's health record.
    #[must_use]
    pub fn health_snapshot(&self) -> BTreeMap<ConnectorName, HealthRecord> {
        self.health.snapshot()
    }

    /// Current health status of one connector.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if nothing is registered under `name`.
    pub fn status_of(&self, name: &str) -> Result<HealthStatus, AgoraError> {
        self.health.status_of(name)
    }

    /// Count connectors per health status.
    #[must_use]
    pub fn connector_health_summary(&self) -> HealthSummary {
        self.health.summary()
    }

    /// Return a connector to a fresh `Healthy` record.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if nothing is registered under `name`.
    pub fn reset_health(&self, name: &str) -> Result<(), AgoraError> {
        self.health.reset(name)
    }
}

fn check_kind(kind: DataKind, payload: Payload) -> Result<Payload, FetchError> {
    if payload.kind() == kind {
        Ok(payload)
    } else {
        Err(FetchError::malformed(format!(
            "expected {kind} payload, got {}",
            payload.kind()
        )))
    }
}
