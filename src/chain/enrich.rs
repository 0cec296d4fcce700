//! Chain enrichment: attaches Greeks to every quote of a snapshot.

use super::types::{EnrichedOption, OptionChainSnapshot, OptionQuote};
use crate::config::{ExpiryHorizon, PricingConfig};
use crate::pricing::compute_greeks;
use crate::utils::{decimal_to_f64, years_until};
use chrono::{DateTime, Utc};
use tracing::trace;

/// Computes Greeks for every quote in the snapshot.
///
/// The result has the same length and order as `snapshot.options`. Spot comes from
/// the snapshot, strike and implied volatility from each quote, and time to expiry
/// and the risk-free rate from `pricing`.
#[must_use]
pub fn enrich_chain(snapshot: &OptionChainSnapshot, pricing: &PricingConfig) -> Vec<EnrichedOption> {
    let spot = decimal_to_f64(snapshot.spot);

    snapshot
        .options
        .iter()
        .map(|quote| enrich_quote(&snapshot.symbol, quote, spot, snapshot.timestamp, pricing))
        .collect()
}

fn enrich_quote(
    symbol: &str,
    quote: &OptionQuote,
    spot: f64,
    as_of: DateTime<Utc>,
    pricing: &PricingConfig,
) -> EnrichedOption {
    let time_to_expiry = match pricing.expiry_horizon {
        ExpiryHorizon::FixedDays(days) => f64::from(days) / 365.0,
        ExpiryHorizon::ContractExpiry => years_until(as_of, quote.expiry),
    };

    let greeks = compute_greeks(
        quote.contract_type,
        spot,
        decimal_to_f64(quote.strike),
        decimal_to_f64(quote.implied_volatility),
        Some(time_to_expiry),
        Some(pricing.risk_free_rate),
    );

    let enriched = EnrichedOption::new(quote.clone(), greeks);
    trace!(
        contract = %enriched.label(symbol),
        delta = greeks.delta,
        gamma = greeks.gamma,
        theta = greeks.theta,
        "greeks computed"
    );
    enriched
}
