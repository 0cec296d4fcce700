//! Integration tests for the pricing module.

use option_chain_alerts::chain::ContractType;
use option_chain_alerts::pricing::{
    DEFAULT_RISK_FREE_RATE, DEFAULT_TIME_TO_EXPIRY, Greeks, compute_greeks, norm_cdf,
};

#[test]
fn test_near_atm_call_profile() {
    let greeks = compute_greeks(
        ContractType::Call,
        24000.0,
        24000.0,
        15.0,
        Some(DEFAULT_TIME_TO_EXPIRY),
        Some(DEFAULT_RISK_FREE_RATE),
    );

    // The positive carry pushes the at-the-money call delta above one half
    assert!(greeks.delta > 0.5 && greeks.delta < 0.56);
    assert!(greeks.gamma > 0.0);
    assert!(greeks.theta < 0.0);
    assert!(greeks.vega > 0.0);
}

#[test]
fn test_delta_bounds_across_strikes() {
    for strike in (20000..=28000).step_by(250) {
        let strike = f64::from(strike);
        let call = compute_greeks(ContractType::Call, 24000.0, strike, 18.0, None, None);
        let put = compute_greeks(ContractType::Put, 24000.0, strike, 18.0, None, None);

        assert!((0.0..=1.0).contains(&call.delta));
        assert!((-1.0..=0.0).contains(&put.delta));
        assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
        assert!(call.gamma >= 0.0);
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }
}

#[test]
fn test_call_delta_increases_with_spot() {
    let deltas: Vec<f64> = (0..20)
        .map(|i| {
            let spot = 23000.0 + f64::from(i) * 100.0;
            compute_greeks(ContractType::Call, spot, 24000.0, 15.0, None, None).delta
        })
        .collect();
    assert!(deltas.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_degenerate_inputs_give_zero() {
    let cases = [
        (0.0, 24000.0, 15.0),
        (24000.0, 0.0, 15.0),
        (-1.0, 24000.0, 15.0),
        (f64::NAN, 24000.0, 15.0),
        (24000.0, f64::INFINITY, 15.0),
        (24000.0, 24000.0, f64::NAN),
    ];
    for (spot, strike, iv) in cases {
        let greeks = compute_greeks(ContractType::Put, spot, strike, iv, None, None);
        assert_eq!(greeks, Greeks::zero());
    }
}

#[test]
fn test_repeatable() {
    let a = compute_greeks(ContractType::Put, 51234.5, 51000.0, 13.7, Some(0.02), Some(0.07));
    let b = compute_greeks(ContractType::Put, 51234.5, 51000.0, 13.7, Some(0.02), Some(0.07));
    assert_eq!(a.delta.to_bits(), b.delta.to_bits());
    assert_eq!(a.theta.to_bits(), b.theta.to_bits());
}

#[test]
fn test_norm_cdf_reference_points() {
    assert!((norm_cdf(0.0) - 0.5).abs() < 1e-7);
    assert!((norm_cdf(1.0) - 0.841_344_746).abs() < 1e-6);
    assert!((norm_cdf(-1.96) - 0.024_997_895).abs() < 1e-6);
    assert!(norm_cdf(10.0) <= 1.0);
    assert!(norm_cdf(-10.0) >= 0.0);
}
