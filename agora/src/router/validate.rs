use agora_core::{
    AgoraError, DataKind, FetchRequest, FieldExtractor, SourceEnvelope, ValidationReport,
    ValidationVerdict,
};

use crate::Agora;

impl Agora {
    /// Compare the default field for `kind` across the envelope's successful sources.
    ///
    /// Uses the configured tolerance. See [`FieldExtractor::default_for`] for the
    /// field compared per kind.
    #[must_use]
    pub fn validate(&self, envelope: &SourceEnvelope, kind: DataKind) -> ValidationVerdict {
        self.validate_with(envelope, &FieldExtractor::default_for(kind))
    }

    /// Compare a caller-chosen field across the envelope's successful sources.
    #[must_use]
    pub fn validate_with(
        &self,
        envelope: &SourceEnvelope,
        extractor: &FieldExtractor,
    ) -> ValidationVerdict {
        let verdict = self.validator.validate(envelope, extractor);
        #[cfg(feature = "tracing")]
        if !verdict.is_consistent {
            tracing::info!(
                target: "agora::validate",
                field = %verdict.field,
                deviation = verdict.max_relative_deviation,
                tolerance = verdict.tolerance,
                "sources disagree"
            );
        }
        verdict
    }

    /// Fetch from every eligible source and validate the kind's default field.
    ///
    /// # Errors
    /// Same as [`fetch_all`](Self::fetch_all). Disagreement between sources is
    /// reported in the verdict, never as an error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "agora::router",
            name = "agora::router::cross_validate",
            skip(self, req),
            fields(symbol = %req.symbol(), kind = %req.kind()),
        )
    )]
    pub async fn cross_validate(&self, req: &FetchRequest) -> Result<ValidationReport, AgoraError> {
        let envelope = self.fetch_all(req).await?;
        let verdict = self.validate(&envelope, req.kind());
        Ok(ValidationReport { envelope, verdict })
    }
}
