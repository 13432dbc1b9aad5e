//! Typed results returned by connectors, one shape per [`DataKind`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::capability::DataKind;

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar open time (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price.
    pub high: Decimal,
    /// Lowest traded price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume, when the provider reports it.
    pub volume: Option<u64>,
}

/// Price history for a symbol, sorted by ascending timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Quote currency (ISO code), when known.
    pub currency: Option<String>,
    /// Bars in ascending time order.
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Most recent bar, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.iter().max_by_key(|b| b.ts)
    }
}

/// Company profile and headline metrics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Long company name.
    pub name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Industry classification.
    pub industry: Option<String>,
    /// Market capitalisation in `currency`.
    pub market_cap: Option<Decimal>,
    /// Shares outstanding.
    pub shares_outstanding: Option<u64>,
    /// Reporting currency (ISO code).
    pub currency: Option<String>,
}

/// Financial statement figures for one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Period end date.
    pub period_end: NaiveDate,
    /// Total revenue.
    pub total_revenue: Option<Decimal>,
    /// Net income.
    pub net_income: Option<Decimal>,
    /// Total assets.
    pub total_assets: Option<Decimal>,
    /// Total liabilities.
    pub total_liabilities: Option<Decimal>,
    /// Operating cash flow.
    pub operating_cash_flow: Option<Decimal>,
}

/// Statement rows for a company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// `true` for quarterly rows, `false` for annual rows.
    pub quarterly: bool,
    /// Rows in any order; use [`FinancialStatements::latest`] for the newest.
    pub rows: Vec<StatementRow>,
}

impl FinancialStatements {
    /// Row with the most recent period end.
    #[must_use]
    pub fn latest(&self) -> Option<&StatementRow> {
        self.rows.iter().max_by_key(|r| r.period_end)
    }
}

/// A dated observation of an economic series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value; `None` when the provider marks it missing.
    pub value: Option<Decimal>,
}

/// Macroeconomic series (e.g. a FRED series).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndicatorSeries {
    /// Series identifier (e.g. `"GDP"`, `"UNRATE"`).
    pub series_id: String,
    /// Units label reported by the provider.
    pub units: Option<String>,
    /// Observations in any order.
    pub observations: Vec<Observation>,
}

impl IndicatorSeries {
    /// Newest observation carrying a value.
    #[must_use]
    pub fn latest_value(&self) -> Option<&Observation> {
        self.observations
            .iter()
            .filter(|o| o.value.is_some())
            .max_by_key(|o| o.date)
    }
}

/// Typed connector result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum Payload {
    /// Price history.
    Price(PriceSeries),
    /// Company profile.
    CompanyInfo(CompanyInfo),
    /// Financial statements.
    FinancialStatements(FinancialStatements),
    /// Economic indicator series.
    EconomicIndicator(IndicatorSeries),
}

impl Payload {
    /// Kind of data carried by this payload.
    #[must_use]
    pub const fn kind(&self) -> DataKind {
        match self {
            Self::Price(_) => DataKind::Price,
            Self::CompanyInfo(_) => DataKind::CompanyInfo,
            Self::FinancialStatements(_) => DataKind::FinancialStatements,
            Self::EconomicIndicator(_) => DataKind::EconomicIndicator,
        }
    }

    /// Borrow the price series, if this is a price payload.
    #[must_use]
    pub const fn as_price(&self) -> Option<&PriceSeries> {
        match self {
            Self::Price(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow the company info, if this is a company-info payload.
    #[must_use]
    pub const fn as_company_info(&self) -> Option<&CompanyInfo> {
        match self {
            Self::CompanyInfo(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow the statements, if this is a financial-statements payload.
    #[must_use]
    pub const fn as_financial_statements(&self) -> Option<&FinancialStatements> {
        match self {
            Self::FinancialStatements(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the indicator series, if this is an economic-indicator payload.
    #[must_use]
    pub const fn as_economic_indicator(&self) -> Option<&IndicatorSeries> {
        match self {
            Self::EconomicIndicator(s) => Some(s),
            _ => None,
        }
    }
}
