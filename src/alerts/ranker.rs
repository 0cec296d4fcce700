//! Turns raw detections into alerts.

use super::gamma::{GammaDirection, GammaSpreadDetection};
use super::id::AlertIdGenerator;
use super::theta::ThetaDecayDetection;
use super::types::{Alert, AlertType};
use crate::utils::decimal_to_f64;
use chrono::{DateTime, Utc};

/// Converts detections into alerts stamped with `now`.
///
/// Gamma-spread alerts come first, then theta-decay alerts, each in detection
/// order. Alerts are never re-sorted by priority.
#[must_use]
pub fn rank_alerts(
    symbol: &str,
    gamma_spreads: &[GammaSpreadDetection],
    theta_decays: &[ThetaDecayDetection],
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut ids = AlertIdGenerator::new(now);

    let gamma = gamma_spreads
        .iter()
        .map(|d| gamma_spread_alert(symbol, d, ids.next_id(), now))
        .collect::<Vec<_>>();
    let theta = theta_decays
        .iter()
        .map(|d| theta_decay_alert(symbol, d, ids.next_id(), now))
        .collect::<Vec<_>>();

    gamma.into_iter().chain(theta).collect()
}

fn gamma_spread_alert(
    symbol: &str,
    detection: &GammaSpreadDetection,
    id: String,
    now: DateTime<Utc>,
) -> Alert {
    let kind = detection.contract_type;
    let current = detection.current_strike.normalize();
    let next = detection.next_strike.normalize();

    let recommendation = match detection.direction {
        GammaDirection::Long => format!("Long Gamma: Buy {current} {kind}, Sell {next} {kind}"),
        GammaDirection::Short => format!("Short Gamma: Sell {current} {kind}, Buy {next} {kind}"),
    };

    Alert {
        id,
        timestamp: now,
        alert_type: AlertType::GammaSpread,
        symbol: symbol.to_string(),
        message: format!("Gamma Spread: {current}/{next} {kind}"),
        details: format!(
            "Spread: {:.4}, Confidence: {:.1}%, Current Γ: {:.4}, Next Γ: {:.4}",
            detection.gamma_spread,
            detection.confidence,
            detection.current_gamma,
            detection.next_gamma
        ),
        priority: detection.priority,
        recommendation,
    }
}

fn theta_decay_alert(
    symbol: &str,
    detection: &ThetaDecayDetection,
    id: String,
    now: DateTime<Utc>,
) -> Alert {
    let option = &detection.option;
    let kind = option.contract_type();
    let strike = option.strike().normalize();

    Alert {
        id,
        timestamp: now,
        alert_type: AlertType::ThetaDecay,
        symbol: symbol.to_string(),
        message: format!("High Theta Decay: {strike} {kind}"),
        details: format!(
            "Theta: {:.4}/day, IV: {:.1}%, Delta: {:.4}, LTP: ₹{}",
            option.theta(),
            decimal_to_f64(option.quote.implied_volatility),
            option.delta(),
            option.quote.last_price.normalize()
        ),
        priority: detection.priority,
        recommendation: format!(
            "Consider selling {kind} at {strike} strike for theta decay strategy"
        ),
    }
}
