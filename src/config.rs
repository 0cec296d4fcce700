//! Scanner configuration.
//!
//! [`TradingConfig`] is an explicit value handed to every call; nothing in the
//! crate reads process-wide settings. It deserializes from the camelCase JSON the
//! dashboard produces, with every section optional.
//!
//! # Usage
//!
//! ```rust
//! use option_chain_alerts::config::load_config_from_str;
//!
//! let config = load_config_from_str(r#"{"gammaThreshold": 0.02, "spreadWidth": 100}"#).unwrap();
//! assert_eq!(config.gamma_threshold, 0.02);
//! assert_eq!(config.theta_decay_min, -0.1);
//! ```

use crate::error::{Error, Result};
use crate::pricing::DEFAULT_RISK_FREE_RATE;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// How the enricher chooses each contract's time to expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryHorizon {
    /// Same horizon for every contract, in calendar days.
    FixedDays(u32),
    /// Days from the snapshot timestamp to each quote's own expiry.
    ContractExpiry,
}

impl Default for ExpiryHorizon {
    fn default() -> Self {
        Self::FixedDays(21)
    }
}

/// Black-Scholes inputs that do not come from the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Annualised risk-free rate.
    pub risk_free_rate: f64,
    /// Time-to-expiry policy.
    pub expiry_horizon: ExpiryHorizon,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            expiry_horizon: ExpiryHorizon::default(),
        }
    }
}

/// Monitoring loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitorConfig {
    /// Delay between monitoring cycles in milliseconds.
    pub monitoring_interval_ms: u64,
    /// Skip cycles outside NSE trading hours.
    pub enforce_market_hours: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            monitoring_interval_ms: 10_000,
            enforce_market_hours: true,
        }
    }
}

impl MonitorConfig {
    /// Returns the monitoring interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.monitoring_interval_ms)
    }
}

/// Detection thresholds and the symbols to scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradingConfig {
    /// Minimum gamma difference between adjacent strikes. Positive.
    pub gamma_threshold: f64,
    /// Theta floor per day; contracts at or below it qualify. Negative.
    pub theta_decay_min: f64,
    /// Maximum strike distance for two contracts to count as adjacent. Positive.
    pub spread_width: Decimal,
    /// Underlyings to monitor.
    pub symbols: BTreeSet<String>,
    /// Pricing model inputs.
    pub pricing: PricingConfig,
    /// Monitoring loop settings.
    pub monitor: MonitorConfig,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            gamma_threshold: 0.05,
            theta_decay_min: -0.1,
            spread_width: dec!(50),
            symbols: [
                "NSE:NIFTY50-INDEX",
                "NSE:NIFTYBANK-INDEX",
                "NSE:FINNIFTY-INDEX",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            pricing: PricingConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl TradingConfig {
    /// Checks every value against its documented range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.gamma_threshold.is_finite() && self.gamma_threshold > 0.0) {
            return Err(Error::invalid_config("gammaThreshold must be positive"));
        }
        if !(self.theta_decay_min.is_finite() && self.theta_decay_min < 0.0) {
            return Err(Error::invalid_config("thetaDecayMin must be negative"));
        }
        if self.spread_width <= Decimal::ZERO {
            return Err(Error::invalid_config("spreadWidth must be positive"));
        }
        if !self.pricing.risk_free_rate.is_finite() {
            return Err(Error::invalid_config("pricing.riskFreeRate must be finite"));
        }
        if self.symbols.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::invalid_config("symbols must not contain blank names"));
        }
        if self.monitor.monitoring_interval_ms == 0 {
            return Err(Error::invalid_config(
                "monitor.monitoringIntervalMs must be positive",
            ));
        }
        Ok(())
    }
}

/// Loads and validates a configuration from a JSON file.
///
/// # Errors
///
/// Returns `Error::ConfigRead` if the file cannot be read, `Error::ConfigParse` if
/// it is not valid JSON, and `Error::InvalidConfig` if validation fails.
pub fn load_config(path: &str) -> Result<TradingConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_string(),
        source: e,
    })?;
    load_config_from_str(&contents)
}

/// Loads and validates a configuration from a JSON string.
///
/// # Errors
///
/// Returns `Error::ConfigParse` if the JSON is malformed and `Error::InvalidConfig`
/// if validation fails.
pub fn load_config_from_str(json: &str) -> Result<TradingConfig> {
    let config: TradingConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
