//! Per-request collection of per-connector outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::connector::ConnectorName;
use crate::error::AgoraError;
use crate::outcome::FetchOutcome;
use crate::payload::Payload;
use crate::request::FetchRequest;

/// Outcomes of one [`FetchRequest`], keyed by connector.
///
/// Holds at most one outcome per connector. The aggregator builds the envelope
/// while calls complete and hands it to the caller by value once every issued
/// call has resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEnvelope {
    request: FetchRequest,
    outcomes: BTreeMap<ConnectorName, FetchOutcome>,
}

impl SourceEnvelope {
    /// Create an empty envelope for a request.
    #[must_use]
    pub const fn new(request: FetchRequest) -> Self {
        Self {
            request,
            outcomes: BTreeMap::new(),
        }
    }

    /// Record the outcome for a connector.
    ///
    /// # Errors
    /// Returns `DuplicateOutcome` if the connector already has an outcome.
    pub fn insert(&mut self, name: ConnectorName, outcome: FetchOutcome) -> Result<(), AgoraError> {
        if self.outcomes.contains_key(&name) {
            return Err(AgoraError::DuplicateOutcome {
                name: name.to_string(),
            });
        }
        self.outcomes.insert(name, outcome);
        Ok(())
    }

    /// Request this envelope answers.
    #[must_use]
    pub const fn request(&self) -> &FetchRequest {
        &self.request
    }

    /// Outcome reported by a connector.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FetchOutcome> {
        self.outcomes.get(name)
    }

    /// Number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no outcome was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Connector names present in the envelope.
    pub fn names(&self) -> impl Iterator<Item = &ConnectorName> {
        self.outcomes.keys()
    }

    /// All outcomes with their connector.
    pub fn iter(&self) -> impl Iterator<Item = (&ConnectorName, &FetchOutcome)> {
        self.outcomes.iter()
    }

    /// Successful payloads with their connector.
    pub fn successes(&self) -> impl Iterator<Item = (&ConnectorName, &Payload)> {
        self.outcomes
            .iter()
            .filter_map(|(n, o)| o.payload().map(|p| (n, p)))
    }

    /// Failed outcomes with their connector.
    pub fn failures(&self) -> impl Iterator<Item = (&ConnectorName, &FetchOutcome)> {
        self.outcomes.iter().filter(|(_, o)| !o.is_success())
    }

    /// Number of successful outcomes.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_success()).count()
    }

    /// Number of failed outcomes.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    /// Fraction of sources that succeeded, in `[0, 1]`; `0` when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.success_count() as f64 / self.len() as f64
    }
}
