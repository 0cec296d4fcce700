//! The alert pipeline entry point.

use super::gamma::detect_gamma_spreads;
use super::ranker::rank_alerts;
use super::theta::detect_theta_decay;
use super::types::{Alert, AlertSummary};
use crate::chain::{OptionChainSnapshot, enrich_chain};
use crate::config::TradingConfig;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Scans a snapshot and returns its alerts, stamped with the current time.
///
/// Returns an empty list when the snapshot has no contracts or nothing crosses a
/// threshold. Never fails.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use option_chain_alerts::alerts::generate_alerts;
/// use option_chain_alerts::chain::OptionChainSnapshot;
/// use option_chain_alerts::config::TradingConfig;
/// use rust_decimal_macros::dec;
///
/// let snapshot = OptionChainSnapshot::new("NSE:NIFTY50-INDEX", dec!(24000), Utc::now(), vec![]);
/// assert!(generate_alerts(&snapshot, &TradingConfig::default()).is_empty());
/// ```
#[must_use]
pub fn generate_alerts(snapshot: &OptionChainSnapshot, config: &TradingConfig) -> Vec<Alert> {
    generate_alerts_at(snapshot, config, Utc::now())
}

/// Same as [`generate_alerts`] with an explicit emission time.
#[must_use]
pub fn generate_alerts_at(
    snapshot: &OptionChainSnapshot,
    config: &TradingConfig,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    if snapshot.is_empty() {
        debug!(symbol = %snapshot.symbol, "empty snapshot, no alerts");
        return Vec::new();
    }

    let chain = enrich_chain(snapshot, &config.pricing);
    let (gamma_spreads, theta_decays) = rayon::join(
        || detect_gamma_spreads(&chain, config),
        || detect_theta_decay(&chain, config),
    );

    let alerts = rank_alerts(&snapshot.symbol, &gamma_spreads, &theta_decays, now);
    info!(
        symbol = %snapshot.symbol,
        contracts = chain.len(),
        summary = %AlertSummary::from_alerts(&alerts),
        "alerts generated"
    );
    alerts
}
