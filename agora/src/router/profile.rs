use std::collections::BTreeMap;

use agora_core::{AgoraError, DataKind, FetchRequest, MultiSourceReport};

use crate::Agora;

impl Agora {
    /// Build a multi-source report for one symbol across several data kinds.
    ///
    /// Behavior and trade-offs:
    /// - Runs [`fetch_all`](Self::fetch_all) for every requested kind concurrently;
    ///   duplicate kinds are fetched once.
    /// - Kinds with no eligible source are recorded in `warnings` instead of failing
    ///   the whole report. Per-source failures stay inside each envelope.
    ///
    /// # Errors
    /// - `InvalidRequest` if the symbol is malformed or `kinds` is empty.
    /// - `NoEligibleSource` (for the first requested kind) if every kind was skipped.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "agora::router",
            name = "agora::router::fetch_profile",
            skip(self, kinds),
            fields(symbol = %symbol, kinds = kinds.len()),
        )
    )]
    pub async fn fetch_profile(
        &self,
        symbol: &str,
        kinds: &[DataKind],
    ) -> Result<MultiSourceReport, AgoraError> {
        let Some(&first) = kinds.first() else {
            return Err(AgoraError::InvalidRequest(
                "no data kinds requested".to_string(),
            ));
        };
        let mut unique: Vec<DataKind> = Vec::with_capacity(kinds.len());
        for k in kinds {
            if !unique.contains(k) {
                unique.push(*k);
            }
        }
        let requests: Vec<FetchRequest> = unique
            .into_iter()
            .map(|k| FetchRequest::new(symbol, k))
            .collect();
        requests[0].validate()?;

        let results = futures::future::join_all(
            requests
                .iter()
                .map(|r| async move { (r.kind(), self.fetch_all(r).await) }),
        )
        .await;

        let mut envelopes = BTreeMap::new();
        let mut warnings: Vec<AgoraError> = Vec::new();
        for (kind, res) in results {
            match res {
                Ok(env) => {
                    envelopes.insert(kind, env);
                }
                Err(e @ AgoraError::NoEligibleSource { .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(target: "agora::router", %kind, "kind skipped: no eligible source");
                    warnings.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        if envelopes.is_empty() {
            return Err(AgoraError::NoEligibleSource { kind: first });
        }

        Ok(MultiSourceReport {
            symbol: requests[0].symbol().to_string(),
            envelopes,
            warnings,
        })
    }
}
