use agora_core::{Period, PriceBar, PriceSeries};

use super::{date, dec};

type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, u64);

pub fn by_symbol(s: &str, period: Option<Period>) -> Option<PriceSeries> {
    let rows: &[Row] = match s {
        "AAPL" => &[
            ("2024-03-04", "148.20", "150.10", "147.90", "149.40", 51_000_000),
            ("2024-03-05", "149.40", "150.60", "148.80", "149.95", 48_200_000),
            ("2024-03-06", "149.95", "151.00", "149.10", "150.00", 47_500_000),
        ],
        "MSFT" => &[
            ("2024-03-04", "412.00", "416.50", "410.20", "415.50", 19_800_000),
            ("2024-03-05", "415.50", "421.30", "414.00", "420.00", 21_400_000),
            ("2024-03-06", "420.00", "422.00", "417.80", "418.60", 18_900_000),
        ],
        "GOOGL" => &[
            ("2024-03-04", "138.10", "139.70", "137.50", "139.20", 30_100_000),
            ("2024-03-05", "139.20", "141.00", "138.90", "140.60", 28_700_000),
            ("2024-03-06", "140.60", "141.20", "139.80", "140.10", 26_300_000),
        ],
        "KO" => &[
            ("2024-03-04", "59.40", "60.10", "59.20", "59.90", 12_300_000),
            ("2024-03-05", "59.90", "60.30", "59.60", "60.00", 11_800_000),
            ("2024-03-06", "60.00", "60.40", "59.70", "59.80", 10_900_000),
        ],
        _ => return None,
    };
    let keep = match period {
        Some(Period::D1) => 1,
        _ => rows.len(),
    };
    let bars = rows[rows.len() - keep..]
        .iter()
        .map(|&(d, o, h, l, c, v)| PriceBar {
            ts: date(d).and_hms_opt(21, 0, 0).unwrap().and_utc(),
            open: dec(o),
            high: dec(h),
            low: dec(l),
            close: dec(c),
            volume: Some(v),
        })
        .collect();
    Some(PriceSeries {
        currency: Some("USD".to_string()),
        bars,
    })
}
