//! Option chain records.

use crate::pricing::Greeks;
use crate::utils::format_expiry_yyyymmdd;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Implied volatility assumed when a quote arrives without one (percent).
pub const DEFAULT_IV_PERCENT: Decimal = dec!(20);

/// Call or put.
///
/// Serialized with the exchange codes `"CE"` and `"PE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContractType {
    /// Call option (`CE`).
    #[serde(rename = "CE", alias = "Call", alias = "CALL")]
    Call,
    /// Put option (`PE`).
    #[serde(rename = "PE", alias = "Put", alias = "PUT")]
    Put,
}

impl ContractType {
    /// Returns the exchange code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Call => "CE",
            Self::Put => "PE",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single contract quote from a chain snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuote {
    /// Strike price.
    pub strike: Decimal,
    /// Call or put.
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    /// Last traded price.
    #[serde(alias = "ltp")]
    pub last_price: Decimal,
    /// Implied volatility in percent.
    #[serde(alias = "iv", default = "default_iv_percent")]
    pub implied_volatility: Decimal,
    /// Traded volume.
    #[serde(default)]
    pub volume: u64,
    /// Open interest.
    #[serde(default, alias = "oi")]
    pub open_interest: u64,
    /// Expiry date.
    pub expiry: NaiveDate,
}

fn default_iv_percent() -> Decimal {
    DEFAULT_IV_PERCENT
}

impl OptionQuote {
    /// Creates a quote with no traded volume or open interest.
    ///
    /// # Arguments
    ///
    /// * `strike` - The strike price
    /// * `contract_type` - Call or put
    /// * `last_price` - Last traded price
    /// * `implied_volatility` - Implied volatility in percent
    /// * `expiry` - Expiry date
    #[must_use]
    pub const fn new(
        strike: Decimal,
        contract_type: ContractType,
        last_price: Decimal,
        implied_volatility: Decimal,
        expiry: NaiveDate,
    ) -> Self {
        Self {
            strike,
            contract_type,
            last_price,
            implied_volatility,
            volume: 0,
            open_interest: 0,
            expiry,
        }
    }

    /// Sets volume and open interest.
    #[must_use]
    pub const fn with_activity(mut self, volume: u64, open_interest: u64) -> Self {
        self.volume = volume;
        self.open_interest = open_interest;
        self
    }
}

/// Point-in-time capture of an option chain for one underlying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChainSnapshot {
    /// Underlying symbol (e.g. `NSE:NIFTY50-INDEX`).
    pub symbol: String,
    /// Spot price of the underlying.
    pub spot: Decimal,
    /// Capture time.
    pub timestamp: DateTime<Utc>,
    /// Contract quotes in source order.
    #[serde(default)]
    pub options: Vec<OptionQuote>,
}

impl OptionChainSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        spot: Decimal,
        timestamp: DateTime<Utc>,
        options: Vec<OptionQuote>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            spot,
            timestamp,
            options,
        }
    }

    /// Returns true if the snapshot holds no contracts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// A quote together with its computed Greeks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedOption {
    /// The source quote, unchanged.
    #[serde(flatten)]
    pub quote: OptionQuote,
    /// Greeks computed from the quote and the snapshot spot.
    #[serde(flatten)]
    pub greeks: Greeks,
}

impl EnrichedOption {
    /// Pairs a quote with its Greeks.
    #[must_use]
    pub const fn new(quote: OptionQuote, greeks: Greeks) -> Self {
        Self { quote, greeks }
    }

    /// Returns the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.quote.strike
    }

    /// Returns the contract type.
    #[must_use]
    pub const fn contract_type(&self) -> ContractType {
        self.quote.contract_type
    }

    /// Returns delta.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.greeks.delta
    }

    /// Returns gamma.
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.greeks.gamma
    }

    /// Returns theta per day.
    #[must_use]
    pub const fn theta(&self) -> f64 {
        self.greeks.theta
    }

    /// Returns vega per volatility point.
    #[must_use]
    pub const fn vega(&self) -> f64 {
        self.greeks.vega
    }

    /// Builds a contract label such as `NIFTY-20251222-24000-CE`.
    #[must_use]
    pub fn label(&self, underlying: &str) -> String {
        format!(
            "{}-{}-{}-{}",
            underlying,
            format_expiry_yyyymmdd(self.quote.expiry),
            self.quote.strike.normalize(),
            self.quote.contract_type
        )
    }
}
