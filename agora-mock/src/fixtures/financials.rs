use agora_core::{FinancialStatements, StatementRow};

use super::{date, dec};

#[rustfmt::skip]
pub fn by_symbol(s: &str) -> Option<FinancialStatements> {
    // period_end, revenue, net income, assets, liabilities, operating cash flow
    let rows: &[(&str, &str, &str, &str, &str, &str)] = match s {
        "AAPL" => &[
            ("2022-09-24", "394328000000", "99803000000", "352755000000", "302083000000", "122151000000"),
            ("2023-09-30", "383285000000", "96995000000", "352583000000", "290437000000", "110543000000"),
        ],
        "MSFT" => &[
            ("2022-06-30", "198270000000", "72738000000", "364840000000", "198298000000", "89035000000"),
            ("2023-06-30", "211915000000", "72361000000", "411976000000", "205753000000", "87582000000"),
        ],
        _ => return None,
    };
    Some(FinancialStatements {
        quarterly: false,
        rows: rows
            .iter()
            .map(|&(d, rev, ni, ta, tl, ocf)| StatementRow {
                period_end: date(d),
                total_revenue: Some(dec(rev)),
                net_income: Some(dec(ni)),
                total_assets: Some(dec(ta)),
                total_liabilities: Some(dec(tl)),
                operating_cash_flow: Some(dec(ocf)),
            })
            .collect(),
    })
}
