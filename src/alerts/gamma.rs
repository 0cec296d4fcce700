//! Adjacent-strike gamma spread detection.

use super::types::Priority;
use crate::chain::{ContractType, EnrichedOption};
use crate::config::TradingConfig;
use crate::pricing::NUMERICAL_TOLERANCE;
use rust_decimal::Decimal;
use tracing::debug;

/// Gamma spread is scaled by this factor into a confidence percentage.
const CONFIDENCE_SCALE: f64 = 1000.0;

/// Confidence above which a spread is high priority.
const HIGH_CONFIDENCE: f64 = 70.0;

/// Which side of the spread to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GammaDirection {
    /// Lower strike carries more gamma: buy it, sell the next strike.
    Long,
    /// Lower strike carries less gamma: sell it, buy the next strike.
    Short,
}

/// A qualifying pair of adjacent same-type contracts.
#[derive(Debug, Clone, PartialEq)]
pub struct GammaSpreadDetection {
    /// Contract type shared by both legs.
    pub contract_type: ContractType,
    /// Strike of the first contract in ascending order.
    pub current_strike: Decimal,
    /// Strike of the following contract.
    pub next_strike: Decimal,
    /// Gamma of the first contract.
    pub current_gamma: f64,
    /// Gamma of the following contract.
    pub next_gamma: f64,
    /// `|current_gamma - next_gamma|`.
    pub gamma_spread: f64,
    /// Confidence in percent, capped at 100.
    pub confidence: f64,
    /// Derived from `confidence`.
    pub priority: Priority,
    /// Trade orientation.
    pub direction: GammaDirection,
}

/// Scans calls, then puts, for adjacent strikes whose gammas diverge.
///
/// Each group is sorted ascending by strike (stable, so equal strikes keep their
/// chain order) and every consecutive pair within `spread_width` whose gamma
/// difference reaches `gamma_threshold` is reported. Overlapping pairs are all
/// emitted.
#[must_use]
pub fn detect_gamma_spreads(
    chain: &[EnrichedOption],
    config: &TradingConfig,
) -> Vec<GammaSpreadDetection> {
    let mut detections = Vec::new();

    for contract_type in [ContractType::Call, ContractType::Put] {
        let mut group: Vec<&EnrichedOption> = chain
            .iter()
            .filter(|o| o.contract_type() == contract_type)
            .collect();
        group.sort_by_key(|o| o.strike());

        for pair in group.windows(2) {
            if let Some(detection) = evaluate_pair(pair[0], pair[1], config) {
                debug!(
                    contract_type = %contract_type,
                    current_strike = %detection.current_strike,
                    next_strike = %detection.next_strike,
                    gamma_spread = detection.gamma_spread,
                    "gamma spread detected"
                );
                detections.push(detection);
            }
        }
    }

    detections
}

fn evaluate_pair(
    current: &EnrichedOption,
    next: &EnrichedOption,
    config: &TradingConfig,
) -> Option<GammaSpreadDetection> {
    if (current.strike() - next.strike()).abs() > config.spread_width {
        return None;
    }

    let gamma_spread = (current.gamma() - next.gamma()).abs();
    if gamma_spread - config.gamma_threshold < -NUMERICAL_TOLERANCE {
        return None;
    }

    let confidence = (gamma_spread * CONFIDENCE_SCALE).min(100.0);
    let direction = if current.gamma() > next.gamma() {
        GammaDirection::Long
    } else {
        GammaDirection::Short
    };

    Some(GammaSpreadDetection {
        contract_type: current.contract_type(),
        current_strike: current.strike(),
        next_strike: next.strike(),
        current_gamma: current.gamma(),
        next_gamma: next.gamma(),
        gamma_spread,
        confidence,
        priority: confidence_priority(confidence),
        direction,
    })
}

/// High only when confidence clears the cutoff by more than the numerical tolerance.
fn confidence_priority(confidence: f64) -> Priority {
    if confidence - HIGH_CONFIDENCE > NUMERICAL_TOLERANCE * CONFIDENCE_SCALE {
        Priority::High
    } else {
        Priority::Medium
    }
}
