//! Black-Scholes Greeks.
//!
//! Closed-form first-order sensitivities plus gamma for European calls and puts,
//! evaluated in `f64` with the normal approximation from [`super::normal`].

// Black-Scholes uses standard mathematical notation (s, k, t, r, sigma)
#![allow(clippy::many_single_char_names)]

use super::normal::{norm_cdf, norm_pdf};
use crate::chain::ContractType;
use serde::{Deserialize, Serialize};

/// Default time to expiry in years (a three-week horizon).
pub const DEFAULT_TIME_TO_EXPIRY: f64 = 21.0 / 365.0;

/// Smallest time to expiry fed to the model (one calendar day).
pub const MIN_TIME_TO_EXPIRY: f64 = 1.0 / 365.0;

/// Default annualised risk-free rate.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.065;

/// Annualised volatility floor (1%).
pub const MIN_VOLATILITY: f64 = 0.01;

const DAYS_PER_YEAR: f64 = 365.0;

/// Option sensitivities.
///
/// `theta` is per calendar day and `vega` is per one volatility point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS.
    pub delta: f64,
    /// Gamma: d²V/dS². Never negative.
    pub gamma: f64,
    /// Theta: dV/dt per day, usually negative.
    pub theta: f64,
    /// Vega: dV/dσ per 1% of volatility.
    pub vega: f64,
}

impl Greeks {
    /// All-zero Greeks, the response to degenerate inputs.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            delta: 0.0,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
        }
    }

    /// Returns true if every sensitivity is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.delta == 0.0 && self.gamma == 0.0 && self.theta == 0.0 && self.vega == 0.0
    }
}

/// Computes Black-Scholes Greeks for one contract.
///
/// # Arguments
///
/// * `contract_type` - Call or put; only delta and theta depend on it
/// * `spot` - Underlying price
/// * `strike` - Strike price
/// * `iv_percent` - Implied volatility in percent (e.g. `15.0` for 15%)
/// * `time_to_expiry` - Years to expiry, defaults to [`DEFAULT_TIME_TO_EXPIRY`]
/// * `risk_free_rate` - Annualised rate, defaults to [`DEFAULT_RISK_FREE_RATE`]
///
/// Time is clamped to at least one day and volatility to at least 1%. A
/// non-positive or non-finite spot, strike or time yields [`Greeks::zero`]; this is
/// the defined answer for degenerate contracts, not an error.
///
/// # Examples
///
/// ```rust
/// use option_chain_alerts::chain::ContractType;
/// use option_chain_alerts::pricing::compute_greeks;
///
/// let greeks = compute_greeks(ContractType::Call, 24000.0, 24000.0, 15.0, None, None);
/// assert!(greeks.delta > 0.5);
/// assert!(greeks.gamma > 0.0);
/// assert!(greeks.theta < 0.0);
/// ```
#[must_use]
pub fn compute_greeks(
    contract_type: ContractType,
    spot: f64,
    strike: f64,
    iv_percent: f64,
    time_to_expiry: Option<f64>,
    risk_free_rate: Option<f64>,
) -> Greeks {
    let s = spot;
    let k = strike;
    let t = time_to_expiry
        .unwrap_or(DEFAULT_TIME_TO_EXPIRY)
        .max(MIN_TIME_TO_EXPIRY);
    let r = risk_free_rate.unwrap_or(DEFAULT_RISK_FREE_RATE);
    let sigma = (iv_percent / 100.0).max(MIN_VOLATILITY);

    // f64::max drops NaN, so finiteness is checked on the raw inputs
    let finite = [s, k, iv_percent, r].iter().all(|v| v.is_finite())
        && time_to_expiry.is_none_or(f64::is_finite);
    if !finite || s <= 0.0 || k <= 0.0 || t <= 0.0 || sigma <= 0.0 {
        return Greeks::zero();
    }

    let sqrt_t = t.sqrt();
    let sigma_sqrt_t = sigma * sqrt_t;
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;

    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = k * (-r * t).exp();
    let decay = -s * pdf_d1 * sigma / (2.0 * sqrt_t);

    let (delta, annual_theta) = match contract_type {
        ContractType::Call => (
            norm_cdf(d1),
            decay - r * discounted_strike * norm_cdf(d2),
        ),
        ContractType::Put => (
            norm_cdf(d1) - 1.0,
            decay + r * discounted_strike * norm_cdf(-d2),
        ),
    };

    Greeks {
        delta,
        gamma: pdf_d1 / (s * sigma_sqrt_t),
        theta: annual_theta / DAYS_PER_YEAR,
        vega: s * pdf_d1 * sqrt_t / 100.0,
    }
}
