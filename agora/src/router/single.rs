use agora_core::{AgoraError, FetchOutcome, FetchRequest, Payload, SourceFailure, Sourced};

use crate::Agora;
use crate::router::util::collapse_failures;

impl Agora {
    /// Fetch `req` from the best available connector, falling back in order.
    ///
    /// Behavior and trade-offs:
    /// - Tries eligible connectors sequentially in router order (healthiest first),
    ///   each bounded by the per-call timeout, and returns the first success.
    /// - Every attempt is recorded with the health monitor, so repeated failures
    ///   push a connector down the order for later requests.
    /// - Cheaper than [`fetch_all`](Self::fetch_all) on rate limits, but offers no
    ///   cross-source check.
    ///
    /// # Errors
    /// - `InvalidRequest` for malformed requests, `NoEligibleSource` when nothing
    ///   serves the kind.
    /// - `NotFound` if every attempted connector reported the data as missing.
    /// - `AllSourcesFailed` with per-connector failures otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "agora::router",
            name = "agora::router::fetch_one",
            skip(self, req),
            fields(symbol = %req.symbol(), kind = %req.kind()),
        )
    )]
    pub async fn fetch_one(&self, req: &FetchRequest) -> Result<Sourced<Payload>, AgoraError> {
        req.validate()?;
        let mut attempted_any = false;
        let mut failures: Vec<SourceFailure> = Vec::new();

        for (name, c) in self.eligible_with_handles(req.kind()) {
            attempted_any = true;
            match self.dispatch(&name, &c, req).await {
                FetchOutcome::Success { payload, .. } => {
                    return Ok(Sourced {
                        source: name,
                        value: payload,
                    });
                }
                FetchOutcome::Failure { kind, message, .. } => {
                    failures.push(SourceFailure {
                        connector: name,
                        kind,
                        message,
                    });
                }
            }
        }

        Err(collapse_failures(
            req.kind(),
            attempted_any,
            failures,
            Some(format!("{} for {}", req.kind(), req.symbol())),
        ))
    }
}
