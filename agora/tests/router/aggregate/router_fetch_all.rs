use agora::{
    Agora, AgoraError, DataKind, DataKinds, ErrorKind, FetchError, FetchRequest, HealthStatus,
};

use crate::helpers::{AAPL, MockConnector, price};

#[tokio::test]
async fn fetch_all_collects_one_outcome_per_eligible_connector() {
    let a = MockConnector::builder().name("a").returns_ok(price("150.00")).build();
    let b = MockConnector::builder().name("b").returns_ok(price("150.10")).build();
    let c = MockConnector::builder()
        .name("c")
        .fails_with(FetchError::upstream("502"))
        .build();
    // serves something else entirely
    let d = MockConnector::builder()
        .name("d")
        .serves(DataKinds::ECONOMIC_INDICATOR)
        .build();

    let agora = Agora::builder()
        .with_connector(a)
        .with_connector(b)
        .with_connector(c)
        .with_connector(d)
        .build()
        .unwrap();

    let req = FetchRequest::new(AAPL, DataKind::Price);
    let env = agora.fetch_all(&req).await.unwrap();

    assert_eq!(env.len(), agora.eligible_connectors(DataKind::Price).len());
    assert_eq!(env.len(), 3);
    assert_eq!(env.success_count(), 2);
    assert_eq!(env.failure_count(), 1);
    assert!(env.get("d").is_none());
    assert_eq!(env.get("c").unwrap().error_kind(), Some(ErrorKind::UpstreamError));
    assert_eq!(env.request(), &req);
}

#[tokio::test]
async fn fetch_all_records_health_for_every_outcome() {
    let ok = MockConnector::builder().name("ok").returns_ok(price("1")).build();
    let bad = MockConnector::builder()
        .name("bad")
        .fails_with(FetchError::rate_limited("429"))
        .build();
    let agora = Agora::builder()
        .with_connector(ok)
        .with_connector(bad)
        .build()
        .unwrap();

    let req = FetchRequest::new(AAPL, DataKind::Price);
    for _ in 0..3 {
        agora.fetch_all(&req).await.unwrap();
    }

    let snap = agora.health_snapshot();
    assert_eq!(snap["ok"].total_successes, 3);
    assert_eq!(snap["ok"].status, HealthStatus::Healthy);
    assert!(snap["ok"].last_success_at.is_some());
    assert_eq!(snap["bad"].consecutive_failures, 3);
    assert_eq!(snap["bad"].status, HealthStatus::Degraded);
    assert_eq!(agora.status_of("bad").unwrap(), HealthStatus::Degraded);
}

#[tokio::test]
async fn fetch_all_without_eligible_source_fails_hard() {
    let a = MockConnector::builder().name("a").returns_ok(price("1")).build();
    let agora = Agora::builder().with_connector(a).build().unwrap();

    let err = agora
        .fetch_all(&FetchRequest::new("UNRATE", DataKind::EconomicIndicator))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AgoraError::NoEligibleSource {
            kind: DataKind::EconomicIndicator
        }
    );
    assert!(err.is_hard_failure());
}

#[tokio::test]
async fn fetch_all_rejects_invalid_request_without_calling_connectors() {
    let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let a = MockConnector::builder()
        .name("a")
        .counting(&calls)
        .returns_ok(price("1"))
        .build();
    let agora = Agora::builder().with_connector(a).build().unwrap();

    for sym in ["", "   ", "BRK B"] {
        let err = agora
            .fetch_all(&FetchRequest::new(sym, DataKind::Price))
            .await
            .unwrap_err();
        assert!(matches!(err, AgoraError::InvalidRequest(_)), "{sym:?}: {err:?}");
    }
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fetch_all_with_all_failures_is_still_an_envelope() {
    let a = MockConnector::builder()
        .name("a")
        .fails_with(FetchError::not_found("AAPL"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .fails_with(FetchError::upstream("down"))
        .build();
    let agora = Agora::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let env = agora
        .fetch_all(&FetchRequest::new(AAPL, DataKind::Price))
        .await
        .unwrap();
    assert_eq!(env.success_count(), 0);
    assert_eq!(env.failure_count(), 2);
    assert_eq!(env.coverage(), 0.0);
}
