//! Shared fixtures.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use option_chain_alerts::chain::{ContractType, OptionChainSnapshot, OptionQuote};
use option_chain_alerts::config::{ExpiryHorizon, TradingConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A Monday, 11:30 IST.
pub fn session_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 6, 0, 0).unwrap()
}

pub fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
}

/// Calls and puts at 95, 100 and 105 around a spot of 100.
///
/// With a one-day horizon only the 100 strike carries gamma, so both adjacent
/// pairs of each type qualify, and the 100 call and put are the only theta hits.
pub fn short_dated_chain(symbol: &str) -> OptionChainSnapshot {
    let mut options = Vec::new();
    for strike in [dec!(95), dec!(100), dec!(105)] {
        for contract_type in [ContractType::Call, ContractType::Put] {
            options.push(OptionQuote::new(
                strike,
                contract_type,
                dec!(1.25),
                dec!(15),
                expiry(),
            ));
        }
    }
    OptionChainSnapshot::new(symbol, dec!(100), session_time(), options)
}

pub fn short_dated_config() -> TradingConfig {
    let mut config = TradingConfig::default();
    config.pricing.expiry_horizon = ExpiryHorizon::FixedDays(1);
    config
}

/// NIFTY-like chain: 50-point strikes, both types, 21-day default horizon.
pub fn nifty_chain() -> OptionChainSnapshot {
    let mut options = Vec::new();
    for strike in (23500..=24500).step_by(50) {
        let strike = Decimal::from(strike);
        options.push(OptionQuote::new(strike, ContractType::Call, dec!(150), dec!(14), expiry()));
        options.push(OptionQuote::new(strike, ContractType::Put, dec!(140), dec!(15), expiry()));
    }
    OptionChainSnapshot::new("NSE:NIFTY50-INDEX", dec!(24000), session_time(), options)
}
