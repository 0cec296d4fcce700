//! Demo: Alert Scan - One Monitoring Cycle
//!
//! Scans a synthetic NIFTY chain and a short-dated FINNIFTY chain, prints the
//! Greeks of the at-the-money contracts and persists every alert in memory.
//!
//! Run with: `cargo run --example alert_scan`

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use option_chain_alerts::alerts::AlertSummary;
use option_chain_alerts::chain::{ContractType, OptionChainSnapshot, OptionQuote, enrich_chain};
use option_chain_alerts::config::{ExpiryHorizon, TradingConfig};
use option_chain_alerts::monitor::{AlertMonitor, SnapshotSource};
use option_chain_alerts::sink::{AlertDispatcher, InMemoryAlertSink};
use option_chain_alerts::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::info;

/// Synthetic chains with a volatility smile around the spot.
struct SyntheticSource;

impl SyntheticSource {
    fn chain(symbol: &str, spot: i64, step: i64, expiry: NaiveDate) -> OptionChainSnapshot {
        let mut options = Vec::new();
        for i in -6..=6_i64 {
            let strike = Decimal::from(spot + i * step);
            let iv = dec!(14) + Decimal::from(i.abs()) * dec!(0.4);
            let intrinsic_call = (Decimal::from(-i * step)).max(Decimal::ZERO);
            let intrinsic_put = (Decimal::from(i * step)).max(Decimal::ZERO);
            options.push(
                OptionQuote::new(strike, ContractType::Call, intrinsic_call + dec!(85), iv, expiry)
                    .with_activity(12_000, 48_000),
            );
            options.push(
                OptionQuote::new(strike, ContractType::Put, intrinsic_put + dec!(80), iv, expiry)
                    .with_activity(10_500, 51_000),
            );
        }
        OptionChainSnapshot::new(symbol, Decimal::from(spot), Utc::now(), options)
    }
}

#[async_trait]
impl SnapshotSource for SyntheticSource {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<OptionChainSnapshot> {
        let expiry = (Utc::now() + Duration::days(2)).date_naive();
        match symbol {
            "NSE:NIFTY50-INDEX" => Ok(Self::chain(symbol, 24000, 50, expiry)),
            "NSE:FINNIFTY-INDEX" => Ok(Self::chain(symbol, 100, 5, expiry)),
            _ => Err(Error::snapshot_unavailable(symbol, "no synthetic chain")),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    info!("=== Alert Scan Demo ===\n");

    let mut config = TradingConfig::default();
    config.pricing.expiry_horizon = ExpiryHorizon::ContractExpiry;
    config.monitor.enforce_market_hours = false;

    // === Greeks Around The Money ===
    info!("--- NIFTY Greeks ---");
    if let Ok(snapshot) = SyntheticSource.fetch_snapshot("NSE:NIFTY50-INDEX").await {
        for option in enrich_chain(&snapshot, &config.pricing)
            .iter()
            .filter(|o| (o.strike() - snapshot.spot).abs() <= dec!(50))
        {
            info!(
                "{}: delta {:.4}, gamma {:.6}, theta {:.2}/day, vega {:.2}",
                option.label("NIFTY"),
                option.delta(),
                option.gamma(),
                option.theta(),
                option.vega()
            );
        }
    }

    // === One Monitoring Cycle ===
    info!("\n--- Monitoring Cycle ---");
    let sink = Arc::new(InMemoryAlertSink::bounded_default());
    let (dispatcher, worker) = AlertDispatcher::spawn(sink.clone());
    let monitor = AlertMonitor::new(SyntheticSource, config).with_dispatcher(dispatcher);

    let report = monitor.run_cycle(Utc::now()).await;
    info!(
        "Scanned {} symbols, {} failed",
        report.symbols_scanned, report.symbols_failed
    );
    for alert in &report.alerts {
        info!("[{}] {} {}", alert.priority, alert.symbol, alert.message);
        info!("    {}", alert.details);
        info!("    {}", alert.recommendation);
    }
    info!("Summary: {}", AlertSummary::from_alerts(&report.alerts));

    // === Persistence ===
    drop(monitor);
    match worker.await {
        Ok(stats) => info!(
            "\nPersisted {} alerts ({} failed), sink holds {}",
            stats.persisted,
            stats.failed,
            sink.len()
        ),
        Err(e) => info!("\nSink worker did not finish: {e}"),
    }

    info!("\n=== Demo Complete ===");
}
