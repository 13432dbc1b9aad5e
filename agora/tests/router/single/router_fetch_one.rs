use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use agora::{Agora, AgoraError, DataKind, ErrorKind, FetchError, FetchRequest, HealthStatus};

use crate::helpers::{AAPL, MSFT, MockConnector, price};

#[tokio::test]
async fn fetch_one_falls_back_past_failures_and_records_health() {
    let late_calls = Arc::new(AtomicUsize::new(0));
    let down = MockConnector::builder()
        .name("down")
        .fails_with(FetchError::upstream("503"))
        .build();
    let up = MockConnector::builder().name("up").returns_ok(price("420.00")).build();
    let never = MockConnector::builder()
        .name("never")
        .counting(&late_calls)
        .returns_ok(price("999"))
        .build();

    let agora = Agora::builder()
        .with_connector(down)
        .with_connector(up)
        .with_connector(never)
        .build()
        .unwrap();

    let got = agora
        .fetch_one(&FetchRequest::new(MSFT, DataKind::Price))
        .await
        .unwrap();
    assert_eq!(got.source, "up");
    assert_eq!(got.value, price("420.00"));
    assert_eq!(late_calls.load(Ordering::SeqCst), 0);

    let snap = agora.health_snapshot();
    assert_eq!(snap["down"].consecutive_failures, 1);
    assert_eq!(snap["up"].total_successes, 1);
    assert_eq!(snap["never"].total_successes, 0);
}

#[tokio::test]
async fn fetch_one_prefers_healthy_sources() {
    let down = MockConnector::builder()
        .name("down")
        .fails_with(FetchError::timeout("slow"))
        .build();
    let up = MockConnector::builder().name("up").returns_ok(price("1")).build();
    let agora = Agora::builder()
        .with_connector(down)
        .with_connector(up)
        .build()
        .unwrap();

    let req = FetchRequest::new(AAPL, DataKind::Price);
    for _ in 0..3 {
        agora.fetch_one(&req).await.unwrap();
    }
    assert_eq!(agora.status_of("down").unwrap(), HealthStatus::Degraded);

    // now tried after "up", so its failure count stops growing
    agora.fetch_one(&req).await.unwrap();
    assert_eq!(agora.health_snapshot()["down"].consecutive_failures, 3);
}

#[tokio::test]
async fn fetch_one_all_not_found_collapses_to_not_found() {
    let a = MockConnector::builder()
        .name("a")
        .fails_with(FetchError::not_found("x"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .fails_with(FetchError::not_found("y"))
        .build();
    let agora = Agora::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = agora
        .fetch_one(&FetchRequest::new("ZZZZ", DataKind::Price))
        .await
        .unwrap_err();
    assert_eq!(err, AgoraError::not_found("price for ZZZZ"));
}

#[tokio::test]
async fn fetch_one_mixed_failures_are_listed_per_source() {
    let a = MockConnector::builder()
        .name("a")
        .fails_with(FetchError::rate_limited("429"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .fails_with(FetchError::not_found("y"))
        .build();
    let agora = Agora::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    match agora
        .fetch_one(&FetchRequest::new(AAPL, DataKind::Price))
        .await
        .unwrap_err()
    {
        AgoraError::AllSourcesFailed(list) => {
            let kinds: Vec<ErrorKind> = list.iter().map(|f| f.kind).collect();
            assert_eq!(kinds, [ErrorKind::RateLimited, ErrorKind::NotFound]);
            assert_eq!(list[0].connector, "a");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_one_without_eligible_source() {
    let agora = Agora::builder()
        .with_connector(MockConnector::builder().name("a").build())
        .build()
        .unwrap();
    let err = agora
        .fetch_one(&FetchRequest::new(AAPL, DataKind::CompanyInfo))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AgoraError::NoEligibleSource {
            kind: DataKind::CompanyInfo
        }
    );
}
