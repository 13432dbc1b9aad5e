use agora_core::{IndicatorSeries, Observation};

use super::{date, dec};

type Obs = &'static [(&'static str, Option<&'static str>)];

const UNRATE: Obs = &[
    ("2024-01-01", Some("3.7")),
    ("2024-02-01", Some("3.9")),
    ("2024-03-01", Some("3.8")),
];

// Latest month not yet published.
const FEDFUNDS: Obs = &[
    ("2024-01-01", Some("5.33")),
    ("2024-02-01", Some("5.33")),
    ("2024-03-01", None),
];

const GDP: Obs = &[
    ("2023-07-01", Some("27610.128")),
    ("2023-10-01", Some("27956.998")),
];

const CPIAUCSL: Obs = &[
    ("2024-01-01", Some("308.417")),
    ("2024-02-01", Some("310.326")),
];

/// Series ids follow FRED naming.
pub fn by_series(id: &str) -> Option<IndicatorSeries> {
    let (units, obs) = match id {
        "UNRATE" => ("Percent", UNRATE),
        "FEDFUNDS" => ("Percent", FEDFUNDS),
        "GDP" => ("Billions of Dollars", GDP),
        "CPIAUCSL" => ("Index 1982-1984=100", CPIAUCSL),
        _ => return None,
    };
    Some(IndicatorSeries {
        series_id: id.to_string(),
        units: Some(units.to_string()),
        observations: obs
            .iter()
            .map(|&(d, v)| Observation {
                date: date(d),
                value: v.map(dec),
            })
            .collect(),
    })
}
