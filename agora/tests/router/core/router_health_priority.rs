use agora::{Agora, DataKind, FetchError, FetchRequest, HealthStatus};

use crate::helpers::{AAPL, MockConnector, price};

fn names(agora: &Agora) -> Vec<String> {
    agora
        .eligible_connectors(DataKind::Price)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[tokio::test]
async fn unhealthy_connector_moves_to_the_back_but_stays_eligible() {
    let broken = MockConnector::builder()
        .name("broken")
        .fails_with(FetchError::upstream("503"))
        .build();
    let good = MockConnector::builder().name("good").returns_ok(price("5")).build();

    let agora = Agora::builder()
        .with_connector(broken)
        .with_connector(good)
        .build()
        .unwrap();
    assert_eq!(names(&agora), ["broken", "good"]);

    let req = FetchRequest::new(AAPL, DataKind::Price);
    for _ in 0..6 {
        agora.fetch_all(&req).await.unwrap();
    }
    assert_eq!(agora.status_of("broken").unwrap(), HealthStatus::Unhealthy);
    assert_eq!(names(&agora), ["good", "broken"]);

    // still called: status is advisory
    let env = agora.fetch_all(&req).await.unwrap();
    assert_eq!(env.len(), 2);
}

#[tokio::test]
async fn ties_keep_registration_order() {
    let mk = |n: &'static str| MockConnector::builder().name(n).returns_ok(price("1")).build();
    let agora = Agora::builder()
        .with_connector(mk("c"))
        .with_connector(mk("a"))
        .with_connector(mk("b"))
        .build()
        .unwrap();
    assert_eq!(names(&agora), ["c", "a", "b"]);
    agora
        .fetch_all(&FetchRequest::new(AAPL, DataKind::Price))
        .await
        .unwrap();
    assert_eq!(names(&agora), ["c", "a", "b"]);
}

#[tokio::test]
async fn degraded_sorts_between_healthy_and_unhealthy() {
    let degrade = MockConnector::builder()
        .name("degrading")
        .fails_with(FetchError::timeout("slow"))
        .build();
    let dead = MockConnector::builder()
        .name("dead")
        .fails_with(FetchError::not_found("delisted"))
        .build();
    let ok = MockConnector::builder().name("ok").returns_ok(price("1")).build();
    let agora = Agora::builder()
        .with_connector(dead)
        .with_connector(degrade)
        .with_connector(ok)
        .build()
        .unwrap();

    let req = FetchRequest::new(AAPL, DataKind::Price);
    for _ in 0..3 {
        agora.fetch_all(&req).await.unwrap();
    }
    // terminal failures still pass through degraded first
    assert_eq!(agora.status_of("dead").unwrap(), HealthStatus::Degraded);

    agora.fetch_all(&req).await.unwrap();
    assert_eq!(agora.status_of("degrading").unwrap(), HealthStatus::Degraded);
    assert_eq!(agora.status_of("dead").unwrap(), HealthStatus::Unhealthy);
    assert_eq!(names(&agora), ["ok", "degrading", "dead"]);

    agora.reset_health("dead").unwrap();
    assert_eq!(names(&agora), ["dead", "ok", "degrading"]);
}

#[tokio::test]
async fn success_resets_degraded_connector_immediately() {
    let n = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let flaky = MockConnector::builder()
        .name("flaky")
        .counting(&n)
        .with_fetch_fn({
            let n = n.clone();
            move |_| {
                // fourth call succeeds
                if n.load(std::sync::atomic::Ordering::SeqCst) <= 3 {
                    Err(FetchError::upstream("x"))
                } else {
                    Ok(price("1"))
                }
            }
        })
        .build();
    let agora = Agora::builder().with_connector(flaky).build().unwrap();
    let req = FetchRequest::new(AAPL, DataKind::Price);
    for _ in 0..3 {
        agora.fetch_all(&req).await.unwrap();
    }
    assert_eq!(agora.status_of("flaky").unwrap(), HealthStatus::Degraded);
    agora.fetch_all(&req).await.unwrap();
    let rec = agora.health_snapshot()["flaky"].clone();
    assert_eq!(rec.status, HealthStatus::Healthy);
    assert_eq!(rec.consecutive_failures, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ordering_stays_a_permutation_under_concurrent_updates() {
    let mut builder = Agora::builder();
    let mut expected: Vec<String> = Vec::new();
    for i in 0..8 {
        let name: &'static str = Box::leak(format!("src{i}").into_boxed_str());
        let c = if i % 2 == 0 {
            MockConnector::builder()
                .name(name)
                .fails_with(FetchError::timeout("slow"))
                .build()
        } else {
            MockConnector::builder().name(name).returns_ok(price("1")).build()
        };
        builder = builder.with_connector(c);
        expected.push(name.to_string());
    }
    let agora = std::sync::Arc::new(builder.build().unwrap());

    let writer = {
        let agora = agora.clone();
        tokio::spawn(async move {
            let req = FetchRequest::new(AAPL, DataKind::Price);
            for _ in 0..50 {
                agora.fetch_all(&req).await.unwrap();
            }
        })
    };
    for _ in 0..500 {
        let mut seen = names(&agora);
        seen.sort();
        assert_eq!(seen, expected);
        tokio::task::yield_now().await;
    }
    writer.await.unwrap();
    assert_eq!(names(&agora)[..4], ["src1", "src3", "src5", "src7"]);
}
