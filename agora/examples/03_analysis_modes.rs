//! A thin presentation layer over the engine.
//!
//! `cargo run --example 03_analysis_modes -- AAPL comprehensive`
mod common;

use std::process::ExitCode;

use agora::{Agora, AgoraError, DataKind, FetchRequest, MultiSourceReport, Period};

#[derive(Debug, Clone, Copy)]
enum Mode {
    Basic,
    Comprehensive,
    Technical,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "comprehensive" => Ok(Self::Comprehensive),
            "technical" => Ok(Self::Technical),
            other => Err(format!("unknown mode {other:?}; expected basic|comprehensive|technical")),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    common::init_tracing();
    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "AAPL".to_string());
    let mode = match args.next().as_deref().unwrap_or("basic").parse::<Mode>() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let agora = match common::build_agora() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("setup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let res = match mode {
        Mode::Basic => basic(&agora, &symbol).await,
        Mode::Comprehensive => comprehensive(&agora, &symbol).await,
        Mode::Technical => technical(&agora, &symbol).await,
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_hard_failure() => {
            eprintln!("analysis failed: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            // partial data was already printed
            eprintln!("warning: {e}");
            ExitCode::SUCCESS
        }
    }
}

async fn basic(agora: &Agora, symbol: &str) -> Result<(), AgoraError> {
    let report = agora
        .fetch_profile(symbol, &[DataKind::Price, DataKind::CompanyInfo])
        .await?;
    print_profile(&report);
    Ok(())
}

async fn comprehensive(agora: &Agora, symbol: &str) -> Result<(), AgoraError> {
    let report = agora.fetch_profile(symbol, &DataKind::ALL).await?;
    print_profile(&report);
    println!("\nCross-source checks:");
    for (kind, env) in &report.envelopes {
        let v = agora.validate(env, *kind);
        let note = if v.insufficient_sources {
            "single source"
        } else if v.is_consistent {
            "ok"
        } else {
            "disagree"
        };
        println!(
            "  {:<22} {:<14} {note} ({:.3}%)",
            kind.as_str(),
            v.field,
            v.max_relative_deviation * 100.0
        );
    }
    Ok(())
}

async fn technical(agora: &Agora, symbol: &str) -> Result<(), AgoraError> {
    let req = FetchRequest::new(symbol, DataKind::Price).with_period(Period::M1);
    let got = agora.fetch_one(&req).await?;
    let Some(series) = got.value.as_price() else {
        return Err(AgoraError::not_found(format!("price history for {symbol}")));
    };
    let mut bars = series.bars.clone();
    bars.sort_by_key(|b| b.ts);
    let closes: Vec<f64> = bars
        .iter()
        .filter_map(|b| f64::try_from(b.close).ok())
        .collect();
    let (Some(first), Some(last)) = (closes.first(), closes.last()) else {
        return Err(AgoraError::not_found(format!("price history for {symbol}")));
    };
    #[allow(clippy::cast_precision_loss)]
    let sma = closes.iter().sum::<f64>() / closes.len() as f64;
    println!("{symbol} via {} ({} bars)", got.source, closes.len());
    println!("  last close   {last:.2}");
    println!("  period move  {:+.2}%", (last - first) / first * 100.0);
    println!("  simple avg   {sma:.2}");
    println!(
        "  trend        {}",
        if *last >= sma { "above average" } else { "below average" }
    );
    Ok(())
}

fn print_profile(report: &MultiSourceReport) {
    println!("{} profile", report.symbol);
    for (kind, env) in &report.envelopes {
        println!(
            "  {:<22} {}/{} sources ({:.0}% coverage)",
            kind.as_str(),
            env.success_count(),
            env.len(),
            env.coverage() * 100.0
        );
        for (name, outcome) in env.failures() {
            let kind = outcome.error_kind().map_or("?", |k| k.as_str());
            println!("      {name} failed: {kind}");
        }
    }
    println!("  sources: {:?}", report.responding_sources());
    for w in &report.warnings {
        println!("  note: {w}");
    }
}
