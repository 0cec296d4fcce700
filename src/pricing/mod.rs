//! Option pricing sensitivities.
//!
//! - [`compute_greeks`]: Black-Scholes delta, gamma, theta and vega
//! - [`norm_cdf`] / [`norm_pdf`]: standard normal helpers
//!
//! Every function here is pure; identical inputs produce bit-identical outputs.

mod greeks;
mod normal;

pub use greeks::{
    DEFAULT_RISK_FREE_RATE, DEFAULT_TIME_TO_EXPIRY, Greeks, MIN_TIME_TO_EXPIRY, MIN_VOLATILITY,
    compute_greeks,
};
pub use normal::{NUMERICAL_TOLERANCE, norm_cdf, norm_pdf};
