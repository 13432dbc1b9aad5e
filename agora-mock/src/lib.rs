//! Mock connectors for CI-safe tests and examples.
//!
//! - [`MockConnector`] serves deterministic fixtures. The symbols `FAIL`, `TIMEOUT`
//!   and `MISSING` drive the failure paths.
//! - [`DynamicMockConnector`] defers every call to a test-owned controller.
use std::time::Duration;

use async_trait::async_trait;
use agora_core::{Connector, DataKind, DataKinds, FetchError, FetchRequest, Payload};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Latency injected for the `TIMEOUT` symbol.
pub const TIMEOUT_DELAY: Duration = Duration::from_millis(200);

/// Mock connector providing deterministic data from static fixtures.
///
/// Prices, company info and financial statements are keyed by ticker
/// (`AAPL`, `MSFT`, `GOOGL`, `KO`); economic indicators by FRED series id
/// (`UNRATE`, `FEDFUNDS`, `GDP`, `CPIAUCSL`).
#[derive(Debug, Clone, Copy)]
pub struct MockConnector {
    name: &'static str,
    capabilities: DataKinds,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Mock named `agora-mock` serving every kind.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "agora-mock",
            capabilities: DataKinds::all(),
        }
    }

    /// Same fixtures under another registry name.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            capabilities: DataKinds::all(),
        }
    }

    /// Restrict the advertised capabilities.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: DataKinds) -> Self {
        self.capabilities = capabilities;
        self
    }

    async fn maybe_fail_or_timeout(symbol: &str, kind: DataKind) -> Result<(), FetchError> {
        match symbol {
            "FAIL" => Err(FetchError::upstream(format!("forced failure: {kind}"))),
            "MISSING" => Err(FetchError::not_found(format!("{kind} for {symbol}"))),
            "TIMEOUT" => {
                // Callers with a shorter per-call timeout see this as a timeout.
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn capabilities(&self) -> DataKinds {
        self.capabilities
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<Payload, FetchError> {
        let s = request.symbol();
        let kind = request.kind();
        if !self.supports(kind) {
            return Err(FetchError::not_found(format!("{kind} not offered by {}", self.name)));
        }
        Self::maybe_fail_or_timeout(s, kind).await?;
        let found = match kind {
            DataKind::Price => fixtures::price::by_symbol(s, request.period()).map(Payload::Price),
            DataKind::CompanyInfo => fixtures::company::by_symbol(s).map(Payload::CompanyInfo),
            DataKind::FinancialStatements => {
                fixtures::financials::by_symbol(s).map(Payload::FinancialStatements)
            }
            DataKind::EconomicIndicator => {
                fixtures::economic::by_series(s).map(Payload::EconomicIndicator)
            }
        };
        found.ok_or_else(|| FetchError::not_found(format!("{kind} for {s}")))
    }
}
