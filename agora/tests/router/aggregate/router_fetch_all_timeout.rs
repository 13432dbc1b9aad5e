use std::time::Duration;

use agora::{Agora, DataKind, ErrorKind, FetchRequest};

use crate::helpers::{AAPL, MockConnector, price};

#[tokio::test(start_paused = true)]
async fn slow_connector_becomes_timeout_failure() {
    let fast = MockConnector::builder().name("fast").returns_ok(price("10")).build();
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(10))
        .returns_ok(price("10"))
        .build();

    let agora = Agora::builder()
        .with_connector(fast)
        .with_connector(slow)
        .provider_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let env = agora
        .fetch_all(&FetchRequest::new(AAPL, DataKind::Price))
        .await
        .unwrap();

    let slow_outcome = env.get("slow").unwrap();
    assert_eq!(slow_outcome.error_kind(), Some(ErrorKind::Timeout));
    assert!(slow_outcome.latency() >= Duration::from_secs(1));
    assert!(env.get("fast").unwrap().is_success());

    let rec = agora.health_snapshot()["slow"].clone();
    assert_eq!(rec.last_error, Some(ErrorKind::Timeout));
    assert_eq!(rec.consecutive_failures, 1);
}

#[tokio::test(start_paused = true)]
async fn fetch_all_waits_for_slow_successes() {
    let fast = MockConnector::builder().name("fast").returns_ok(price("10")).build();
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(3))
        .returns_ok(price("10.01"))
        .build();
    let agora = Agora::builder()
        .with_connector(fast)
        .with_connector(slow)
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    let env = agora
        .fetch_all(&FetchRequest::new(AAPL, DataKind::Price))
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert_eq!(env.success_count(), 2);
    assert!(env.get("slow").unwrap().latency() >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn fixture_timeout_symbol_exceeds_short_timeout() {
    let agora = Agora::builder()
        .with_connector(std::sync::Arc::new(agora_mock::MockConnector::new()))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let env = agora
        .fetch_all(&FetchRequest::new("TIMEOUT", DataKind::Price))
        .await
        .unwrap();
    assert_eq!(
        env.get("agora-mock").unwrap().error_kind(),
        Some(ErrorKind::Timeout)
    );
}
