//! Report envelopes produced by the orchestrator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::capability::DataKind;
use crate::connector::ConnectorName;
use crate::envelope::SourceEnvelope;
use crate::error::AgoraError;
use crate::verdict::ValidationVerdict;

/// A value tagged with the connector that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sourced<T> {
    /// Connector that produced `value`.
    pub source: ConnectorName,
    /// Produced value.
    pub value: T,
}

/// Multi-source fetch plus the consistency verdict computed over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Per-source outcomes.
    pub envelope: SourceEnvelope,
    /// Verdict for the kind's default field.
    pub verdict: ValidationVerdict,
}

/// Summary of a multi-kind fetch for one symbol.
///
/// Carries one envelope per kind that had at least one eligible source, and
/// non-fatal warnings for kinds that were skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSourceReport {
    /// Requested symbol.
    pub symbol: String,
    /// Envelopes keyed by kind.
    pub envelopes: BTreeMap<DataKind, SourceEnvelope>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<AgoraError>,
}

impl MultiSourceReport {
    /// Connectors that returned at least one successful payload, deduplicated.
    #[must_use]
    pub fn responding_sources(&self) -> Vec<ConnectorName> {
        let mut out: Vec<ConnectorName> = self
            .envelopes
            .values()
            .flat_map(|e| e.successes().map(|(n, _)| n.clone()))
            .collect();
        out.sort();
        out.dedup();
        out
    }
}
