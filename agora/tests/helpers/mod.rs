// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use agora::{CompanyInfo, Decimal, Payload, PriceBar, PriceSeries};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
#[allow(dead_code)]
pub const UNRATE: &str = "UNRATE";

/// Construct a UTC `DateTime` from components for readability in tests.
pub fn dt(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Utc> {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .expect("invalid date")
        .and_hms_opt(20, 0, 0)
        .expect("invalid time components")
        .and_utc()
}

/// Parse a decimal literal without unwrap noise in tests.
pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

/// Single-bar USD price series closing at `close`.
pub fn price(close: &str) -> Payload {
    let c = dec(close);
    Payload::Price(PriceSeries {
        currency: Some("USD".into()),
        bars: vec![PriceBar {
            ts: dt(2024, 3, 6),
            open: c,
            high: c,
            low: c,
            close: c,
            volume: Some(1_000_000),
        }],
    })
}

/// Company info carrying only a market cap.
#[allow(dead_code)]
pub fn company(market_cap: &str) -> Payload {
    Payload::CompanyInfo(CompanyInfo {
        market_cap: Some(dec(market_cap)),
        ..CompanyInfo::default()
    })
}
