use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capability::DataKind;
use crate::connector::ConnectorName;
use crate::outcome::{ErrorKind, FetchError};

/// A failed attempt against one connector, kept for aggregate errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    /// Connector that failed.
    pub connector: ConnectorName,
    /// Failure class.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl SourceFailure {
    /// Tag a connector error with the connector it came from.
    #[must_use]
    pub fn new(connector: ConnectorName, err: FetchError) -> Self {
        Self {
            connector,
            kind: err.kind,
            message: err.message,
        }
    }
}

/// Unified error type for the agora workspace.
///
/// Per-call connector failures are data (see [`FetchOutcome`](crate::FetchOutcome));
/// this type covers registry misuse, routing dead-ends, invalid input and the
/// aggregate outcome of single-value fetches.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgoraError {
    /// No connector is registered under this name.
    #[error("unknown connector: {name}")]
    UnknownConnector {
        /// Requested connector name.
        name: String,
    },

    /// A connector with this name is already registered.
    #[error("duplicate connector: {name}")]
    DuplicateConnector {
        /// Conflicting connector name.
        name: String,
    },

    /// No registered connector can serve the requested kind.
    #[error("no eligible source for {kind}")]
    NoEligibleSource {
        /// Requested kind.
        kind: DataKind,
    },

    /// The request is malformed and no connector was contacted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The engine configuration is inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An envelope already holds an outcome for this connector.
    #[error("duplicate outcome for connector: {name}")]
    DuplicateOutcome {
        /// Connector name reported twice.
        name: String,
    },

    /// Every attempted source reported the resource as missing.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "price for AAPL".
        what: String,
    },

    /// All attempted sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<SourceFailure>),
}

impl AgoraError {
    /// Helper: build an `UnknownConnector` error.
    pub fn unknown_connector(name: impl Into<String>) -> Self {
        Self::UnknownConnector { name: name.into() }
    }

    /// Helper: build a `DuplicateConnector` error.
    pub fn duplicate_connector(name: impl Into<String>) -> Self {
        Self::DuplicateConnector { name: name.into() }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if a presentation layer should report the request as hard-failed.
    ///
    /// Only routing dead-ends qualify; everything else still carries usable,
    /// annotated data or is a caller mistake.
    #[must_use]
    pub const fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            Self::NoEligibleSource { .. } | Self::UnknownConnector { .. }
        )
    }

    /// Returns true if every aggregated failure is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::AllSourcesFailed(list) => {
                !list.is_empty() && list.iter().all(|f| f.kind.is_retryable())
            }
            _ => false,
        }
    }
}
