mod common;

use agora::{Connector, DataKind, FetchRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let agora = common::build_agora()?;

    println!("Registered connectors:");
    for name in agora.list_connectors() {
        let c = agora.connector(name.as_str())?;
        let kinds: Vec<_> = c.capabilities().kinds().map(|k| k.to_string()).collect();
        println!("  {:<14} {:<8} {}", name.as_str(), c.vendor(), kinds.join(", "));
    }

    // "FAIL" makes every fixture connector answer with an upstream error.
    let bad = FetchRequest::new("FAIL", DataKind::Price);
    for _ in 0..3 {
        let env = agora.fetch_all(&bad).await?;
        println!(
            "FAIL price: {}/{} sources answered",
            env.success_count(),
            env.len()
        );
    }

    println!("\nHealth after three failed rounds:");
    for (name, rec) in agora.health_snapshot() {
        println!(
            "  {:<14} {:<9} consecutive={} last_error={}",
            name.as_str(),
            rec.status.to_string(),
            rec.consecutive_failures,
            rec.last_error.map_or("-", |k| k.as_str())
        );
    }
    println!("Price routing order: {:?}", agora.eligible_connectors(DataKind::Price));

    // One good call brings a connector straight back.
    let ok = agora
        .fetch_one(&FetchRequest::new("AAPL", DataKind::Price))
        .await?;
    println!("\nAAPL price served by {}", ok.source);

    let s = agora.connector_health_summary();
    println!(
        "Summary: {} healthy, {} degraded, {} unhealthy (of {})",
        s.healthy,
        s.degraded,
        s.unhealthy,
        s.total()
    );
    Ok(())
}
