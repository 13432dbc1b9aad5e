//! Cross-source consistency checks over a [`SourceEnvelope`].

use core::fmt;
use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;

use agora_types::{
    ConnectorName, DEFAULT_TOLERANCE, DataKind, Decimal, Payload, SourceEnvelope,
    ValidationVerdict,
};

/// Denominator floor for relative deviation, so two zeros compare as equal.
pub const EPSILON: f64 = 1e-12;

type ExtractFn = dyn Fn(&Payload) -> Option<f64> + Send + Sync;

/// Named numeric projection of a [`Payload`].
///
/// Returns `None` when the payload does not carry the field (wrong shape, empty
/// series, missing value).
#[derive(Clone)]
pub struct FieldExtractor {
    field: String,
    f: Arc<ExtractFn>,
}

impl FieldExtractor {
    /// Build an extractor named `field`.
    pub fn new<F>(field: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Payload) -> Option<f64> + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            f: Arc::new(f),
        }
    }

    /// Default comparable field for a kind.
    ///
    /// | kind                  | field           |
    /// |-----------------------|-----------------|
    /// | `Price`               | latest `close`  |
    /// | `CompanyInfo`         | `market_cap`    |
    /// | `FinancialStatements` | latest `total_revenue` |
    /// | `EconomicIndicator`   | latest `value`  |
    #[must_use]
    pub fn default_for(kind: DataKind) -> Self {
        match kind {
            DataKind::Price => Self::new("close", |p| {
                p.as_price()
                    .and_then(|s| s.latest())
                    .and_then(|b| to_f64(b.close))
            }),
            DataKind::CompanyInfo => Self::new("market_cap", |p| {
                p.as_company_info()
                    .and_then(|c| c.market_cap)
                    .and_then(to_f64)
            }),
            DataKind::FinancialStatements => Self::new("total_revenue", |p| {
                p.as_financial_statements()
                    .and_then(|s| s.latest())
                    .and_then(|r| r.total_revenue)
                    .and_then(to_f64)
            }),
            DataKind::EconomicIndicator => Self::new("value", |p| {
                p.as_economic_indicator()
                    .and_then(|s| s.latest_value())
                    .and_then(|o| o.value)
                    .and_then(to_f64)
            }),
        }
    }

    /// Name of the extracted field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Apply the extractor.
    #[must_use]
    pub fn extract(&self, payload: &Payload) -> Option<f64> {
        (self.f)(payload)
    }
}

impl fmt::Debug for FieldExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldExtractor")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

fn to_f64(d: Decimal) -> Option<f64> {
    d.to_f64()
}

/// `|a-b| / max(|a|, |b|, EPSILON)`.
#[must_use]
pub fn relative_deviation(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs()).max(EPSILON)
}

/// Compares one field across every successful source in an envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSourceValidator {
    tolerance: f64,
}

impl Default for CrossSourceValidator {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl CrossSourceValidator {
    /// Create a validator with a relative tolerance (0.01 = 1%).
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Copy of this validator with a different tolerance.
    #[must_use]
    pub const fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Relative tolerance applied by [`validate`](Self::validate).
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compare the field extracted by `extractor` across successful outcomes.
    ///
    /// Failures are excluded, as are successes yielding no value or a non-finite
    /// one. With fewer than two values the verdict is consistent and flagged
    /// `insufficient_sources`.
    #[must_use]
    pub fn validate(
        &self,
        envelope: &SourceEnvelope,
        extractor: &FieldExtractor,
    ) -> ValidationVerdict {
        let values_by_source: BTreeMap<ConnectorName, f64> = envelope
            .successes()
            .filter_map(|(name, payload)| {
                extractor
                    .extract(payload)
                    .filter(|v| v.is_finite())
                    .map(|v| (name.clone(), v))
            })
            .collect();

        let values: Vec<f64> = values_by_source.values().copied().collect();
        let insufficient_sources = values.len() < 2;
        let max_relative_deviation = if insufficient_sources {
            0.0
        } else {
            let mut max = 0.0_f64;
            for (i, a) in values.iter().enumerate() {
                for b in &values[i + 1..] {
                    max = max.max(relative_deviation(*a, *b));
                }
            }
            max
        };

        ValidationVerdict {
            field: extractor.field().to_string(),
            values_by_source,
            is_consistent: insufficient_sources || max_relative_deviation < self.tolerance,
            max_relative_deviation,
            insufficient_sources,
            tolerance: self.tolerance,
        }
    }
}
