use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use agora_core::{Connector, DataKind, DataKinds, FetchError, FetchRequest, Payload};

/// Instruction for how a fetch should behave for a given input.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(FetchError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<(String, DataKind), MockBehavior<Payload>>,
    requests: Vec<FetchRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for fetches of `kind` for a specific symbol.
    pub async fn set_behavior(
        &self,
        symbol: impl Into<String>,
        kind: DataKind,
        behavior: MockBehavior<Payload>,
    ) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((symbol.into(), kind), behavior);
    }

    /// Return a copy of every request seen so far, in arrival order.
    pub async fn requests(&self) -> Vec<FetchRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Number of requests seen so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Requests without a configured behavior fail with `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    capabilities: DataKinds,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector serving every kind, and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn Connector>, DynamicMockController) {
        Self::new_for_kinds(name, DataKinds::all())
    }

    /// Create a new dynamic mock advertising only `capabilities`, and its controller.
    #[must_use]
    pub fn new_for_kinds(
        name: &'static str,
        capabilities: DataKinds,
    ) -> (Arc<dyn Connector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            capabilities,
            state,
        });
        (me as Arc<dyn Connector>, controller)
    }
}

#[async_trait]
impl Connector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn capabilities(&self) -> DataKinds {
        self.capabilities
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<Payload, FetchError> {
        // Log and snapshot the behavior without holding the lock across the call
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(request.clone());
            guard
                .rules
                .get(&(request.symbol().to_string(), request.kind()))
                .cloned()
        };

        match behavior {
            Some(MockBehavior::Return(p)) => Ok(p),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(FetchError::not_found(format!(
                "no behavior for {request} on {}",
                self.name
            ))),
        }
    }
}
