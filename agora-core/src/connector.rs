use async_trait::async_trait;

use agora_types::{DataKind, DataKinds, FetchError, FetchRequest, Payload};

/// Adapter to one upstream financial data provider.
///
/// Implementations absorb the provider's wire format and classify every failure
/// into an [`ErrorKind`](agora_types::ErrorKind) so health tracking and callers can
/// tell retryable conditions from terminal ones. Timing, timeouts and health
/// bookkeeping are the orchestrator's job; `fetch` should simply do the call.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Stable name used as the registry key (e.g. `"yahoo_finance"`).
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Kinds this connector can serve.
    ///
    /// Default: empty. Connectors must explicitly declare what they support.
    fn capabilities(&self) -> DataKinds {
        DataKinds::empty()
    }

    /// Whether this connector *claims* to serve a given kind.
    fn supports(&self, kind: DataKind) -> bool {
        self.capabilities().serves(kind)
    }

    /// Fetch data for the request.
    ///
    /// The returned payload must match `request.kind()`; a mismatched payload is
    /// recorded as a `Malformed` failure by the orchestrator.
    async fn fetch(&self, request: &FetchRequest) -> Result<Payload, FetchError>;
}
