//! Agora data transfer objects, error types and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod envelope;
mod error;
mod health;
mod outcome;
mod payload;
mod reports;
mod request;
mod verdict;

pub use capability::{DataKind, DataKinds};
pub use config::{DEFAULT_TOLERANCE, EngineConfig};
pub use connector::ConnectorName;
pub use envelope::SourceEnvelope;
pub use error::{AgoraError, SourceFailure};
pub use health::{HealthRecord, HealthStatus, HealthSummary, HealthThresholds};
pub use outcome::{ErrorKind, FetchError, FetchOutcome};
pub use payload::{
    CompanyInfo, FinancialStatements, IndicatorSeries, Observation, Payload, PriceBar,
    PriceSeries, StatementRow,
};
pub use reports::{MultiSourceReport, Sourced, ValidationReport};
pub use request::{FetchRequest, Period};
pub use verdict::ValidationVerdict;

pub use rust_decimal::Decimal;
