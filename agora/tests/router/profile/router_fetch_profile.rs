use std::sync::Arc;

use agora::{Agora, AgoraError, DataKind, DataKinds, FetchRequest};
use agora_mock::MockConnector as FixtureConnector;

use crate::helpers::{AAPL, MockConnector, company, price};

#[tokio::test]
async fn fetch_profile_skips_kinds_without_sources() {
    let prices = MockConnector::builder().name("prices").returns_ok(price("150.00")).build();
    let info = MockConnector::builder()
        .name("info")
        .serves(DataKinds::COMPANY_INFO)
        .returns_ok(company("2310000000000"))
        .build();
    let agora = Agora::builder()
        .with_connector(prices)
        .with_connector(info)
        .build()
        .unwrap();

    let report = agora
        .fetch_profile(
            AAPL,
            &[
                DataKind::Price,
                DataKind::CompanyInfo,
                DataKind::FinancialStatements,
                DataKind::Price,
            ],
        )
        .await
        .unwrap();

    assert_eq!(report.symbol, AAPL);
    assert_eq!(report.envelopes.len(), 2);
    assert_eq!(report.envelopes[&DataKind::Price].success_count(), 1);
    assert_eq!(
        report.warnings,
        vec![AgoraError::NoEligibleSource {
            kind: DataKind::FinancialStatements
        }]
    );
    let sources: Vec<String> = report
        .responding_sources()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(sources, ["info", "prices"]);
}

#[tokio::test]
async fn fetch_profile_fails_when_every_kind_is_skipped() {
    let agora = Agora::builder()
        .with_connector(MockConnector::builder().name("prices").build())
        .build()
        .unwrap();
    let err = agora
        .fetch_profile(AAPL, &[DataKind::EconomicIndicator, DataKind::CompanyInfo])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AgoraError::NoEligibleSource {
            kind: DataKind::EconomicIndicator
        }
    );
}

#[tokio::test]
async fn fetch_profile_rejects_bad_input() {
    let agora = Agora::builder()
        .with_connector(MockConnector::builder().name("prices").build())
        .build()
        .unwrap();
    assert!(matches!(
        agora.fetch_profile("BRK B", &[DataKind::Price]).await,
        Err(AgoraError::InvalidRequest(_))
    ));
    assert!(matches!(
        agora.fetch_profile(AAPL, &[]).await,
        Err(AgoraError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn fetch_profile_against_fixture_connectors() {
    let agora = Agora::builder()
        .with_connector(Arc::new(FixtureConnector::named("yahoo_finance")))
        .with_connector(Arc::new(
            FixtureConnector::named("alpha_vantage")
                .with_capabilities(DataKinds::PRICE | DataKinds::COMPANY_INFO),
        ))
        .build()
        .unwrap();

    let report = agora
        .fetch_profile(
            AAPL,
            &[
                DataKind::Price,
                DataKind::CompanyInfo,
                DataKind::FinancialStatements,
            ],
        )
        .await
        .unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.envelopes[&DataKind::Price].success_count(), 2);
    assert_eq!(report.envelopes[&DataKind::FinancialStatements].len(), 1);

    let v = agora.validate(&report.envelopes[&DataKind::CompanyInfo], DataKind::CompanyInfo);
    assert!(v.is_consistent);
    assert_eq!(v.field, "market_cap");

    // envelope request carries the kind it was fetched for
    assert_eq!(
        report.envelopes[&DataKind::CompanyInfo].request(),
        &FetchRequest::new(AAPL, DataKind::CompanyInfo)
    );
}
