use std::collections::BTreeMap;
use std::sync::Arc;

use agora_core::{
    AgoraError, Connector, ConnectorName, ConnectorRegistry, DataKind, HealthMonitor,
};

use crate::Agora;

/// Static map from data kind to the connectors allowed to serve it.
///
/// Built once from each connector's declared capabilities, optionally narrowed by
/// configured routes. Per-kind lists keep registration order; health only reorders
/// them at selection time.
#[derive(Debug, Clone, Default)]
pub struct DataTypeRouter {
    table: BTreeMap<DataKind, Vec<ConnectorName>>,
}

impl DataTypeRouter {
    /// Build the routing table.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if a route names a connector missing from `registry`.
    pub fn new(
        registry: &ConnectorRegistry,
        routes: &BTreeMap<DataKind, Vec<ConnectorName>>,
    ) -> Result<Self, AgoraError> {
        for name in routes.values().flatten() {
            if !registry.contains(name.as_str()) {
                return Err(AgoraError::unknown_connector(name.as_str()));
            }
        }

        let mut table = BTreeMap::new();
        for kind in DataKind::ALL {
            let allowed = routes.get(&kind);
            let names: Vec<ConnectorName> = registry
                .iter()
                .filter(|(_, c)| c.supports(kind))
                .filter(|(n, _)| allowed.is_none_or(|list| list.contains(*n)))
                .map(|(n, _)| n.clone())
                .collect();
            table.insert(kind, names);
        }
        Ok(Self { table })
    }

    /// Connectors able to serve `kind`, in registration order.
    #[must_use]
    pub fn candidates(&self, kind: DataKind) -> &[ConnectorName] {
        match self.table.get(&kind) {
            Some(v) => v,
            None => &[],
        }
    }

    /// Candidates ordered by health (`Healthy` first), ties by registration order.
    ///
    /// Unhealthy connectors are deprioritised, never dropped.
    #[must_use]
    pub fn eligible(&self, kind: DataKind, health: &HealthMonitor) -> Vec<ConnectorName> {
        let mut out: Vec<ConnectorName> = self.candidates(kind).to_vec();
        // one status read per connector; stable, so ties keep registration order
        out.sort_by_cached_key(|n| health.status_of(n.as_str()).unwrap_or_default());
        out
    }
}

impl Agora {
    /// Connectors eligible for `kind`, in the order they would be tried.
    #[must_use]
    pub fn eligible_connectors(&self, kind: DataKind) -> Vec<ConnectorName> {
        self.router.eligible(kind, &self.health)
    }

    pub(crate) fn eligible_with_handles(
        &self,
        kind: DataKind,
    ) -> Vec<(ConnectorName, Arc<dyn Connector>)> {
        self.eligible_connectors(kind)
            .into_iter()
            .filter_map(|n| {
                let c = self.registry.get(n.as_str()).ok()?.clone();
                Some((n, c))
            })
            .collect()
    }
}
