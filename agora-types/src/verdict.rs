//! Cross-source consistency verdicts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::connector::ConnectorName;

/// Result of comparing one field across the sources that reported it.
///
/// Derived on demand from a [`SourceEnvelope`](crate::SourceEnvelope); never part of
/// the envelope itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Compared field (e.g. `"close"`).
    pub field: String,
    /// Extracted value per successful source.
    pub values_by_source: BTreeMap<ConnectorName, f64>,
    /// `true` when every pair of values is within tolerance, or when fewer than
    /// two sources could be compared.
    pub is_consistent: bool,
    /// Largest pairwise relative deviation (`0.0` with fewer than two values).
    pub max_relative_deviation: f64,
    /// Fewer than two comparable values were available.
    pub insufficient_sources: bool,
    /// Tolerance applied to this verdict.
    pub tolerance: f64,
}

impl ValidationVerdict {
    /// Number of sources that contributed a value.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.values_by_source.len()
    }
}
