#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use agora::{Connector, DataKinds, FetchError, FetchRequest, Payload};
use async_trait::async_trait;
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// Tailor behavior (payload, failure, delay, capabilities) via the builder.
pub struct MockConnector {
    pub name: &'static str,
    pub capabilities: DataKinds,
    pub delay: Duration,
    pub fetch_fn: Arc<dyn Fn(&FetchRequest) -> Result<Payload, FetchError> + Send + Sync>,
    pub calls: Arc<AtomicUsize>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "TestMock"
    }

    fn capabilities(&self) -> DataKinds {
        self.capabilities
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<Payload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        (self.fetch_fn)(request)
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    capabilities: DataKinds,
    delay: Duration,
    fetch_fn: Arc<dyn Fn(&FetchRequest) -> Result<Payload, FetchError> + Send + Sync>,
    calls: Arc<AtomicUsize>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "default_mock",
            capabilities: DataKinds::PRICE,
            delay: Duration::ZERO,
            fetch_fn: Arc::new(|r| Err(FetchError::not_found(format!("{r}")))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn serves(mut self, kinds: DataKinds) -> Self {
        self.capabilities = kinds;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay = d;
        self
    }

    pub fn with_fetch_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&FetchRequest) -> Result<Payload, FetchError> + Send + Sync + 'static,
    {
        self.fetch_fn = Arc::new(f);
        self
    }

    pub fn returns_ok(self, payload: Payload) -> Self {
        self.with_fetch_fn(move |_| Ok(payload.clone()))
    }

    pub fn fails_with(self, err: FetchError) -> Self {
        self.with_fetch_fn(move |_| Err(err.clone()))
    }

    /// Share a call counter with the test body.
    pub fn counting(mut self, calls: &Arc<AtomicUsize>) -> Self {
        self.calls = Arc::clone(calls);
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            capabilities: self.capabilities,
            delay: self.delay,
            fetch_fn: self.fetch_fn,
            calls: self.calls,
        })
    }
}
