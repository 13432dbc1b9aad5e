use std::sync::Arc;

use agora::{Agora, AgoraError, Connector, DataKind, DataKinds};
use agora_mock::MockConnector;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `agora=info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agora=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Three fixture-backed connectors laid out like the usual provider mix.
#[must_use]
pub fn connectors() -> Vec<Arc<dyn Connector>> {
    vec![
        Arc::new(MockConnector::named("yahoo_finance").with_capabilities(
            DataKinds::PRICE | DataKinds::COMPANY_INFO | DataKinds::FINANCIAL_STATEMENTS,
        )),
        Arc::new(
            MockConnector::named("alpha_vantage")
                .with_capabilities(DataKinds::PRICE | DataKinds::FINANCIAL_STATEMENTS),
        ),
        Arc::new(MockConnector::named("fred").with_capabilities(DataKinds::ECONOMIC_INDICATOR)),
    ]
}

/// Build an engine over [`connectors`] with economic data pinned to `fred`.
pub fn build_agora() -> Result<Agora, AgoraError> {
    connectors()
        .into_iter()
        .fold(Agora::builder(), agora::AgoraBuilder::with_connector)
        .route(DataKind::EconomicIndicator, &["fred"])
        .build()
}
