use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Category of requested fact. Determines which connectors are eligible
/// and how results are compared across sources.
///
/// Labels map one-to-one with router endpoints and allow consistent
/// Display formatting and match-exhaustive handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataKind {
    /// Price history (OHLCV bars).
    Price,
    /// Company profile and headline metrics.
    CompanyInfo,
    /// Income statement, balance sheet and cashflow rows.
    FinancialStatements,
    /// Macroeconomic series observations.
    EconomicIndicator,
}

impl DataKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Price,
        Self::CompanyInfo,
        Self::FinancialStatements,
        Self::EconomicIndicator,
    ];

    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::CompanyInfo => "company-info",
            Self::FinancialStatements => "financial-statements",
            Self::EconomicIndicator => "economic-indicator",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "info" is the short label used by command-line front ends
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "company-info" | "info" => Ok(Self::CompanyInfo),
            "financial-statements" | "financials" => Ok(Self::FinancialStatements),
            "economic-indicator" | "economic" => Ok(Self::EconomicIndicator),
            other => Err(format!("unknown data kind: {other}")),
        }
    }
}

bitflags! {
    /// Set of [`DataKind`]s a connector can serve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DataKinds: u8 {
        /// See [`DataKind::Price`].
        const PRICE = 1 << 0;
        /// See [`DataKind::CompanyInfo`].
        const COMPANY_INFO = 1 << 1;
        /// See [`DataKind::FinancialStatements`].
        const FINANCIAL_STATEMENTS = 1 << 2;
        /// See [`DataKind::EconomicIndicator`].
        const ECONOMIC_INDICATOR = 1 << 3;
    }
}

impl DataKinds {
    /// Whether the set contains the given kind.
    #[must_use]
    pub fn serves(self, kind: DataKind) -> bool {
        self.contains(Self::from(kind))
    }

    /// Iterate the kinds in the set in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = DataKind> {
        DataKind::ALL.into_iter().filter(move |k| self.serves(*k))
    }
}

impl From<DataKind> for DataKinds {
    fn from(kind: DataKind) -> Self {
        match kind {
            DataKind::Price => Self::PRICE,
            DataKind::CompanyInfo => Self::COMPANY_INFO,
            DataKind::FinancialStatements => Self::FINANCIAL_STATEMENTS,
            DataKind::EconomicIndicator => Self::ECONOMIC_INDICATOR,
        }
    }
}

impl FromIterator<DataKind> for DataKinds {
    fn from_iter<I: IntoIterator<Item = DataKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, k| acc | Self::from(k))
    }
}
