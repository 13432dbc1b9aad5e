//! Agora aggregates financial data across multiple providers and checks that
//! they agree.
//!
//! Overview
//! - Connectors implementing the `agora_core::Connector` contract are registered
//!   once, by name, on an [`AgoraBuilder`].
//! - Requests are routed by [`DataKind`] to every connector able to serve them,
//!   healthiest first.
//! - Each connector's health is tracked from the outcomes of its calls; repeated
//!   failures deprioritise it without ever excluding it.
//! - Results from several sources can be compared field-by-field within a relative
//!   tolerance.
//!
//! Key behaviors and trade-offs
//! - `fetch_all`: concurrent fan-out to every eligible source, bounded per call by
//!   the provider timeout. Complete picture, highest request volume.
//! - `fetch_one`: sequential fallback in router order. Economical, no cross-check.
//! - `cross_validate`: `fetch_all` plus a verdict on the kind's default field.
//! - `fetch_profile`: several kinds for one symbol; kinds nobody serves become
//!   warnings instead of errors.
//! - Per-call failures never fail a fan-out: they are recorded in the
//!   [`SourceEnvelope`] with a classified [`ErrorKind`].
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use agora::{Agora, DataKind, FetchRequest, Period};
//!
//! let agora = Agora::builder()
//!     .with_connector(Arc::new(YahooConnector::default()))
//!     .with_connector(Arc::new(AlphaVantageConnector::with_key("...")))
//!     .tolerance(0.01)
//!     .build()?;
//!
//! let req = FetchRequest::new("AAPL", DataKind::Price).with_period(Period::M1);
//! let report = agora.cross_validate(&req).await?;
//! if !report.verdict.is_consistent {
//!     eprintln!("sources disagree by {:.2}%", report.verdict.max_relative_deviation * 100.0);
//! }
//! ```
//!
//! See `agora/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Agora, AgoraBuilder};
pub use router::select::DataTypeRouter;
pub use router::util::collapse_failures;

// Re-export core types for convenience
pub use agora_core::{
    AgoraError, CompanyInfo, Connector, ConnectorName, CrossSourceValidator, DataKind, DataKinds,
    Decimal, EngineConfig, ErrorKind, FetchError, FetchOutcome, FetchRequest, FieldExtractor,
    FinancialStatements, HealthRecord, HealthStatus, HealthSummary, HealthThresholds,
    IndicatorSeries, MultiSourceReport, Observation, Payload, Period, PriceBar, PriceSeries,
    SourceEnvelope, SourceFailure, Sourced, StatementRow, ValidationReport, ValidationVerdict,
};
