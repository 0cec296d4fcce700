//! Steep time-decay candidates.

use super::types::Priority;
use crate::chain::EnrichedOption;
use crate::config::TradingConfig;
use crate::pricing::NUMERICAL_TOLERANCE;
use tracing::debug;

/// Maximum number of candidates reported per chain.
pub const MAX_THETA_CANDIDATES: usize = 5;

/// Daily theta below which a candidate is high priority.
///
/// Independent of `TradingConfig::theta_decay_min`.
pub const HIGH_PRIORITY_THETA: f64 = -0.15;

/// A contract whose decay is at least as steep as the configured floor.
#[derive(Debug, Clone, PartialEq)]
pub struct ThetaDecayDetection {
    /// The qualifying contract.
    pub option: EnrichedOption,
    /// Derived from theta.
    pub priority: Priority,
}

impl ThetaDecayDetection {
    /// Returns the contract's theta.
    #[must_use]
    pub const fn theta(&self) -> f64 {
        self.option.greeks.theta
    }
}

/// Selects up to five contracts with `theta <= theta_decay_min`, worst decay first.
///
/// The sort is stable, so contracts with equal theta keep their chain order.
#[must_use]
pub fn detect_theta_decay(
    chain: &[EnrichedOption],
    config: &TradingConfig,
) -> Vec<ThetaDecayDetection> {
    let mut candidates: Vec<&EnrichedOption> = chain
        .iter()
        .filter(|o| o.theta() - config.theta_decay_min <= NUMERICAL_TOLERANCE)
        .collect();
    candidates.sort_by(|a, b| a.theta().total_cmp(&b.theta()));

    candidates
        .into_iter()
        .take(MAX_THETA_CANDIDATES)
        .map(|option| {
            let priority = if HIGH_PRIORITY_THETA - option.theta() > NUMERICAL_TOLERANCE {
                Priority::High
            } else {
                Priority::Medium
            };
            debug!(
                strike = %option.strike(),
                contract_type = %option.contract_type(),
                theta = option.theta(),
                %priority,
                "theta decay candidate"
            );
            ThetaDecayDetection {
                option: option.clone(),
                priority,
            }
        })
        .collect()
}
