//! Alert records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal class of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Gamma divergence between adjacent strikes.
    GammaSpread,
    /// Contract with steep time decay.
    ThetaDecay,
}

impl AlertType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GammaSpread => "GAMMA_SPREAD",
            Self::ThetaDecay => "THETA_DECAY",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert urgency, derived from the detection's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Worth a look.
    Medium,
    /// Act promptly.
    High,
}

impl Priority {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished, human-readable trading alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique identifier.
    pub id: String,
    /// Emission time.
    pub timestamp: DateTime<Utc>,
    /// Signal class.
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Underlying symbol.
    pub symbol: String,
    /// One-line headline.
    pub message: String,
    /// Numeric evidence.
    pub details: String,
    /// Urgency.
    pub priority: Priority,
    /// Suggested trade.
    pub recommendation: String,
}

impl Alert {
    /// Returns true for high-priority alerts.
    #[must_use]
    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

/// Counts over one alert batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    /// Number of alerts.
    pub total_alerts: usize,
    /// Number of gamma-spread alerts.
    pub gamma_spread_alerts: usize,
    /// Number of theta-decay alerts.
    pub theta_decay_alerts: usize,
    /// Number of high-priority alerts.
    pub high_priority_alerts: usize,
}

impl AlertSummary {
    /// Summarises a batch.
    #[must_use]
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        alerts.iter().fold(Self::default(), |mut acc, alert| {
            acc.total_alerts += 1;
            match alert.alert_type {
                AlertType::GammaSpread => acc.gamma_spread_alerts += 1,
                AlertType::ThetaDecay => acc.theta_decay_alerts += 1,
            }
            if alert.is_high_priority() {
                acc.high_priority_alerts += 1;
            }
            acc
        })
    }
}

impl fmt::Display for AlertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} alerts ({} gamma spread, {} theta decay, {} high priority)",
            self.total_alerts,
            self.gamma_spread_alerts,
            self.theta_decay_alerts,
            self.high_priority_alerts
        )
    }
}
