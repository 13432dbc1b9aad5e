mod common;

use std::sync::Arc;

use agora::{Agora, DataKind, FetchRequest, FieldExtractor, Payload, Period};
use agora_mock::{DynamicMockConnector, MockBehavior, MockConnector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    // Two fixture connectors agree exactly.
    let agora = common::build_agora()?;
    let req = FetchRequest::new("AAPL", DataKind::Price).with_period(Period::M1);
    let report = agora.cross_validate(&req).await?;
    print_verdict("fixtures", &report.verdict);

    // A scripted source that quotes a few percent off.
    let (drifting, ctl) = DynamicMockConnector::new_for_kinds("drifting", DataKind::Price.into());
    let fixtures = agora.fetch_one(&req).await?;
    if let Payload::Price(mut series) = fixtures.value {
        for bar in &mut series.bars {
            bar.close *= agora::Decimal::new(103, 2);
        }
        ctl.set_behavior("AAPL", DataKind::Price, MockBehavior::Return(Payload::Price(series)))
            .await;
    }
    let skewed = Agora::builder()
        .with_connector(Arc::new(MockConnector::named("yahoo_finance")))
        .with_connector(drifting)
        .build()?;
    let report = skewed.cross_validate(&req).await?;
    print_verdict("drifting", &report.verdict);

    // Same envelope, another field.
    let open = FieldExtractor::new("open", |p: &Payload| {
        p.as_price()?
            .latest()
            .and_then(|b| f64::try_from(b.open).ok())
    });
    print_verdict("drifting/open", &skewed.validate_with(&report.envelope, &open));

    println!("\n{}", serde_json::to_string_pretty(&report.verdict)?);
    Ok(())
}

fn print_verdict(label: &str, v: &agora::ValidationVerdict) {
    let state = if v.insufficient_sources {
        "not enough sources"
    } else if v.is_consistent {
        "consistent"
    } else {
        "INCONSISTENT"
    };
    println!(
        "[{label}] {}: {state} (max deviation {:.3}%, tolerance {:.2}%)",
        v.field,
        v.max_relative_deviation * 100.0,
        v.tolerance * 100.0
    );
    for (source, value) in &v.values_by_source {
        println!("    {:<14} {value:.2}", source.as_str());
    }
}
