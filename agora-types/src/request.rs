//! Request types issued by callers of the engine.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::capability::DataKind;
use crate::error::AgoraError;

/// Lookback range accepted by time-series kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// One trading day.
    #[serde(rename = "1d")]
    D1,
    /// Five trading days.
    #[serde(rename = "5d")]
    D5,
    /// One month.
    #[serde(rename = "1mo")]
    M1,
    /// Three months.
    #[serde(rename = "3mo")]
    M3,
    /// Six months.
    #[serde(rename = "6mo")]
    M6,
    /// One year.
    #[serde(rename = "1y")]
    Y1,
    /// Two years.
    #[serde(rename = "2y")]
    Y2,
    /// Five years.
    #[serde(rename = "5y")]
    Y5,
    /// Year to date.
    #[serde(rename = "ytd")]
    Ytd,
    /// Everything the provider has.
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// Provider-style label (`"1mo"`, `"6mo"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "1d" => Self::D1,
            "5d" => Self::D5,
            "1mo" => Self::M1,
            "3mo" => Self::M3,
            "6mo" => Self::M6,
            "1y" => Self::Y1,
            "2y" => Self::Y2,
            "5y" => Self::Y5,
            "ytd" => Self::Ytd,
            "max" => Self::Max,
            other => {
                return Err(AgoraError::InvalidRequest(format!(
                    "unknown period: {other}"
                )));
            }
        })
    }
}

/// A logical request for one symbol (or series id) and one data kind.
///
/// Requests are immutable once issued; connectors receive them by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchRequest {
    symbol: String,
    kind: DataKind,
    period: Option<Period>,
}

impl FetchRequest {
    /// Create a request without a period.
    pub fn new(symbol: impl Into<String>, kind: DataKind) -> Self {
        Self {
            symbol: symbol.into().trim().to_string(),
            kind,
            period: None,
        }
    }

    /// Attach a lookback period.
    #[must_use]
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// Ticker symbol or economic series identifier.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Requested data kind.
    #[must_use]
    pub const fn kind(&self) -> DataKind {
        self.kind
    }

    /// Optional lookback period.
    #[must_use]
    pub const fn period(&self) -> Option<Period> {
        self.period
    }

    /// Check the request shape before any connector is contacted.
    ///
    /// # Errors
    /// Returns `InvalidRequest` when the symbol is empty or contains whitespace.
    pub fn validate(&self) -> Result<(), AgoraError> {
        if self.symbol.is_empty() {
            return Err(AgoraError::InvalidRequest(format!(
                "empty symbol for {}",
                self.kind
            )));
        }
        if self.symbol.chars().any(char::is_whitespace) {
            return Err(AgoraError::InvalidRequest(format!(
                "symbol contains whitespace: {:?}",
                self.symbol
            )));
        }
        Ok(())
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period {
            Some(p) => write!(f, "{} {} ({p})", self.kind, self.symbol),
            None => write!(f, "{} {}", self.kind, self.symbol),
        }
    }
}
