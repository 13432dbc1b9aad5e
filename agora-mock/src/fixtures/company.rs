use agora_core::CompanyInfo;

use super::dec;

pub fn by_symbol(s: &str) -> Option<CompanyInfo> {
    let (name, sector, industry, cap, shares) = match s {
        "AAPL" => (
            "Apple Inc.",
            "Technology",
            "Consumer Electronics",
            "2310000000000",
            15_400_000_000,
        ),
        "MSFT" => (
            "Microsoft Corporation",
            "Technology",
            "Software - Infrastructure",
            "3110000000000",
            7_430_000_000,
        ),
        "GOOGL" => (
            "Alphabet Inc.",
            "Communication Services",
            "Internet Content & Information",
            "1740000000000",
            12_400_000_000,
        ),
        "KO" => (
            "The Coca-Cola Company",
            "Consumer Defensive",
            "Beverages - Non-Alcoholic",
            "258000000000",
            4_310_000_000,
        ),
        _ => return None,
    };
    Some(CompanyInfo {
        name: Some(name.to_string()),
        sector: Some(sector.to_string()),
        industry: Some(industry.to_string()),
        market_cap: Some(dec(cap)),
        shares_outstanding: Some(shares),
        currency: Some("USD".to_string()),
    })
}
