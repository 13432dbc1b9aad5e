//! agora-core
//!
//! Traits and engine building blocks shared across the agora ecosystem.
//!
//! - `connector`: the `Connector` trait implemented by every data source adapter.
//! - `registry`: the named, ordered set of connectors an orchestrator owns.
//! - `health`: per-connector health records and the failure state machine.
//! - `validate`: cross-source consistency checks over a `SourceEnvelope`.
//!
//! The data model itself lives in `agora-types` and is re-exported here so
//! connector crates only need a single dependency.
//!
//! Nothing in this crate spawns tasks or depends on a specific async runtime;
//! timeouts and fan-out belong to the orchestrator in `agora`.
#![warn(missing_docs)]

/// The primary `Connector` interface.
pub mod connector;
/// Connector health tracking.
pub mod health;
/// Named connector registry.
pub mod registry;
/// Cross-source validation.
pub mod validate;

pub use connector::Connector;
pub use health::HealthMonitor;
pub use registry::ConnectorRegistry;
pub use validate::{CrossSourceValidator, FieldExtractor};

pub use agora_types::*;
