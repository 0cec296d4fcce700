//! Integration tests for the monitoring cycle.

use crate::common::{nifty_chain, session_time, short_dated_chain, short_dated_config};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use option_chain_alerts::alerts::AlertSummary;
use option_chain_alerts::chain::OptionChainSnapshot;
use option_chain_alerts::monitor::{AlertMonitor, SnapshotSource};
use option_chain_alerts::sink::{AlertDispatcher, InMemoryAlertSink};
use option_chain_alerts::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::watch;

/// Serves the short-dated chain for NIFTY and fails for everything else.
struct NiftyOnly;

#[async_trait]
impl SnapshotSource for NiftyOnly {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<OptionChainSnapshot> {
        if symbol == "NSE:NIFTY50-INDEX" {
            Ok(short_dated_chain(symbol))
        } else {
            Err(Error::snapshot_unavailable(symbol, "HTTP 503"))
        }
    }
}

/// Serves an empty chain for every symbol.
struct EmptyChains;

#[async_trait]
impl SnapshotSource for EmptyChains {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<OptionChainSnapshot> {
        let mut snapshot = nifty_chain();
        snapshot.symbol = symbol.to_string();
        snapshot.options.clear();
        Ok(snapshot)
    }
}

#[tokio::test]
async fn test_failing_symbols_do_not_abort_cycle() {
    let sink = Arc::new(InMemoryAlertSink::new());
    let (dispatcher, worker) = AlertDispatcher::spawn(sink.clone());
    let monitor = AlertMonitor::new(NiftyOnly, short_dated_config()).with_dispatcher(dispatcher);

    let report = monitor.run_cycle(session_time()).await;
    assert!(!report.skipped_market_closed);
    assert_eq!(report.symbols_scanned, 1);
    assert_eq!(report.symbols_failed, 2);

    let summary = AlertSummary::from_alerts(&report.alerts);
    assert_eq!(summary.gamma_spread_alerts, 4);
    assert_eq!(summary.theta_decay_alerts, 2);
    assert!(report.alerts.iter().all(|a| a.symbol == "NSE:NIFTY50-INDEX"));

    drop(monitor);
    let stats = worker.await.unwrap();
    assert_eq!(stats.persisted, 6);
    assert_eq!(sink.len(), 6);
}

#[tokio::test]
async fn test_empty_chains_scan_cleanly() {
    let monitor = AlertMonitor::new(EmptyChains, short_dated_config());
    let report = monitor.run_cycle(session_time()).await;

    assert_eq!(report.symbols_scanned, monitor.config().symbols.len());
    assert_eq!(report.symbols_failed, 0);
    assert!(report.alerts.is_empty());
}

#[tokio::test]
async fn test_after_close_is_skipped() {
    let monitor = AlertMonitor::new(NiftyOnly, short_dated_config());
    // 16:00 IST on a Monday
    let after_close = Utc.with_ymd_and_hms(2025, 12, 1, 10, 30, 0).unwrap();

    let report = monitor.run_cycle(after_close).await;
    assert!(report.skipped_market_closed);
    assert_eq!(report.symbols_failed, 0);
}

/// Counts fetches and serves the short-dated chain.
#[derive(Default)]
struct CountingSource {
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl SnapshotSource for CountingSource {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<OptionChainSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(short_dated_chain(symbol))
    }
}

#[tokio::test(start_paused = true)]
async fn test_run_cycles_on_configured_interval() {
    let mut config = short_dated_config();
    config.monitor.monitoring_interval_ms = 10_000;
    config.monitor.enforce_market_hours = false;
    config.symbols = ["NSE:NIFTY50-INDEX".to_string()].into_iter().collect();

    let sink = Arc::new(InMemoryAlertSink::new());
    let (dispatcher, worker) = AlertDispatcher::spawn(sink.clone());
    let source = CountingSource::default();
    let fetches = Arc::clone(&source.fetches);
    let monitor = AlertMonitor::new(source, config).with_dispatcher(dispatcher);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let stopper = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(35)).await;
        shutdown_tx.send(true).unwrap();
        shutdown_tx
    });

    // Ticks at 0s, 10s, 20s and 30s, shutdown at 35s
    let cycles = monitor.run(shutdown_rx).await;
    assert_eq!(cycles, 4);
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
    let _ = stopper.await.unwrap();

    drop(monitor);
    let stats = worker.await.unwrap();
    assert_eq!(stats.persisted, 4 * 6);
}

#[tokio::test(start_paused = true)]
async fn test_run_honours_shorter_interval() {
    let mut config = short_dated_config();
    config.monitor.monitoring_interval_ms = 1_000;
    config.monitor.enforce_market_hours = false;
    let source = CountingSource::default();
    let fetches = Arc::clone(&source.fetches);
    let monitor = AlertMonitor::new(source, config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(4_500)).await;
        let _ = shutdown_tx.send(true);
    });

    // Ticks at 0s through 4s
    assert_eq!(monitor.run(shutdown_rx).await, 5);
    // Three default symbols per cycle
    assert_eq!(fetches.load(Ordering::SeqCst), 15);
}
