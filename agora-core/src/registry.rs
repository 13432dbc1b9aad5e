//! Named set of connectors available to the engine.

use std::collections::HashMap;
use std::sync::Arc;

use agora_types::{AgoraError, ConnectorName};

use crate::connector::Connector;

/// Connectors keyed by unique name, remembering registration order.
///
/// Populated once while building the orchestrator and read-only afterwards,
/// so request processing reads it without locking.
#[derive(Default, Clone)]
pub struct ConnectorRegistry {
    entries: Vec<(ConnectorName, Arc<dyn Connector>)>,
    index: HashMap<ConnectorName, usize>,
}

impl ConnectorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connector under `name`.
    ///
    /// # Errors
    /// Returns `DuplicateConnector` if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<ConnectorName>,
        connector: Arc<dyn Connector>,
    ) -> Result<(), AgoraError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(AgoraError::duplicate_connector(name.as_str()));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, connector));
        Ok(())
    }

    /// Look up a connector by name.
    ///
    /// # Errors
    /// Returns `UnknownConnector` if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Arc<dyn Connector>, AgoraError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| AgoraError::unknown_connector(name))
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn list_names(&self) -> Vec<ConnectorName> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Registration index of `name`, used to break routing ties.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether a connector is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered connectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, connector)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConnectorName, &Arc<dyn Connector>)> {
        self.entries.iter().map(|(n, c)| (n, c))
    }
}

impl core::fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(n, c)| (n.as_str(), c.vendor())))
            .finish()
    }
}
