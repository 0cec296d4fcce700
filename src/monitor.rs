//! One monitoring cycle across the configured symbols.
//!
//! Chain retrieval is external: a [`SnapshotSource`] delivers parsed snapshots.
//! For each symbol the monitor generates alerts and hands them to the
//! [`AlertDispatcher`] without waiting for storage. [`AlertMonitor::run`] repeats
//! the cycle on the configured interval until shutdown.

use crate::alerts::{Alert, generate_alerts_at};
use crate::chain::OptionChainSnapshot;
use crate::config::TradingConfig;
use crate::error::Result;
use crate::market_hours::is_market_open;
use crate::sink::AlertDispatcher;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Port for fetching a parsed option chain snapshot.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetches the current chain for `symbol`.
    async fn fetch_snapshot(&self, symbol: &str) -> Result<OptionChainSnapshot>;
}

/// Outcome of one cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// True if the cycle was skipped because the market was closed.
    pub skipped_market_closed: bool,
    /// Symbols whose snapshot was scanned.
    pub symbols_scanned: usize,
    /// Symbols whose snapshot could not be fetched.
    pub symbols_failed: usize,
    /// Every alert generated in the cycle, in symbol order.
    pub alerts: Vec<Alert>,
}

/// Runs scan cycles for every configured symbol.
pub struct AlertMonitor<S> {
    source: S,
    config: Arc<TradingConfig>,
    dispatcher: Option<AlertDispatcher>,
}

impl<S: SnapshotSource> AlertMonitor<S> {
    /// Creates a monitor that keeps alerts to itself.
    #[must_use]
    pub fn new(source: S, config: TradingConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
            dispatcher: None,
        }
    }

    /// Forwards every generated batch to `dispatcher`.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: AlertDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TradingConfig {
        &self.config
    }

    /// Runs cycles every `monitor.monitoring_interval_ms` until `shutdown` turns true
    /// or its sender is dropped. Returns the number of cycles started.
    ///
    /// The first cycle runs immediately. A cycle that overruns the interval delays
    /// the next one rather than triggering a burst.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> usize {
        let mut ticker = tokio::time::interval(self.config.monitor.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycles = 0;

        info!(
            interval_ms = self.config.monitor.monitoring_interval_ms,
            symbols = self.config.symbols.len(),
            "alert monitor started"
        );
        while !*shutdown.borrow() {
            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.run_cycle(Utc::now()).await;
                    cycles += 1;
                }
            }
        }

        info!(cycles, "alert monitor stopped");
        cycles
    }

    /// Runs one cycle at `now`.
    ///
    /// Fetch failures are logged and counted; they never abort the cycle. Alert
    /// generation is CPU-bound and runs on Tokio's blocking pool, so large chains do
    /// not stall the calling worker thread.
    pub async fn run_cycle(&self, now: DateTime<Utc>) -> CycleReport {
        let mut report = CycleReport::default();

        if self.config.monitor.enforce_market_hours && !is_market_open(now) {
            info!("market is closed, monitoring paused");
            report.skipped_market_closed = true;
            return report;
        }

        for symbol in &self.config.symbols {
            match self.source.fetch_snapshot(symbol).await {
                Ok(snapshot) => {
                    let config = Arc::clone(&self.config);
                    let generated = tokio::task::spawn_blocking(move || {
                        generate_alerts_at(&snapshot, &config, now)
                    })
                    .await;
                    let alerts = match generated {
                        Ok(alerts) => alerts,
                        Err(e) => {
                            report.symbols_failed += 1;
                            warn!(symbol = %symbol, error = %e, "alert generation aborted");
                            continue;
                        }
                    };
                    report.symbols_scanned += 1;
                    if let Some(dispatcher) = &self.dispatcher {
                        dispatcher.dispatch(alerts.clone());
                    }
                    report.alerts.extend(alerts);
                }
                Err(e) => {
                    report.symbols_failed += 1;
                    warn!(symbol = %symbol, error = %e, "failed to fetch option chain");
                }
            }
        }

        info!(
            scanned = report.symbols_scanned,
            failed = report.symbols_failed,
            alerts = report.alerts.len(),
            "monitoring cycle completed"
        );
        report
    }
}
