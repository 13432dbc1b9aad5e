use agora_core::{AgoraError, FetchRequest, SourceEnvelope};

use crate::Agora;

impl Agora {
    /// Fetch `req` from every eligible connector concurrently.
    ///
    /// Behavior:
    /// - One call per eligible connector, each bounded by the per-call timeout.
    /// - Waits for every call to finish or time out; a slow source delays the
    ///   envelope but never drops the others.
    /// - Each outcome is reported to the health monitor exactly once, before the
    ///   envelope is returned.
    /// - Partial success is not an error: failures are recorded in the envelope.
    ///
    /// Dropping the returned future drops all in-flight calls; no health update
    /// from this request happens afterwards.
    ///
    /// # Errors
    /// - `InvalidRequest` if the request is malformed (no connector is contacted).
    /// - `NoEligibleSource` if no registered connector serves the kind.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "agora::router",
            name = "agora::router::fetch_all",
            skip(self, req),
            fields(symbol = %req.symbol(), kind = %req.kind()),
        )
    )]
    pub async fn fetch_all(&self, req: &FetchRequest) -> Result<SourceEnvelope, AgoraError> {
        req.validate()?;
        let eligible = self.eligible_with_handles(req.kind());
        if eligible.is_empty() {
            return Err(AgoraError::NoEligibleSource { kind: req.kind() });
        }

        let tasks = eligible.into_iter().map(|(name, c)| async move {
            let outcome = self.dispatch(&name, &c, req).await;
            (name, outcome)
        });
        let results = futures::future::join_all(tasks).await;

        let mut envelope = SourceEnvelope::new(req.clone());
        for (name, outcome) in results {
            envelope.insert(name, outcome)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "agora::router",
            successes = envelope.success_count(),
            failures = envelope.failure_count(),
            "fan-out complete"
        );

        Ok(envelope)
    }
}
