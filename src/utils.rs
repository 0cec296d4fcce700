//! Utility functions for the option-chain-alerts library.

use crate::market_hours::exchange_date;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Formats an expiry date as a string in `YYYYMMDD` format.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use option_chain_alerts::utils::format_expiry_yyyymmdd;
///
/// let expiry = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
/// assert_eq!(format_expiry_yyyymmdd(expiry), "20251222");
/// ```
#[must_use]
pub fn format_expiry_yyyymmdd(expiry: NaiveDate) -> String {
    expiry.format("%Y%m%d").to_string()
}

/// Converts a decimal to `f64`, yielding `NaN` when it cannot be represented.
///
/// `NaN` flows into the Greeks calculator as a degenerate input.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Calendar days from the exchange-local date of `now` to `expiry`, in years on a
/// 365-day basis.
///
/// The start date is taken in IST, so a snapshot at 01:00 IST counts from that
/// Indian date even though the UTC date is the day before. Returns zero or a
/// negative value once the expiry has passed; callers clamp.
#[must_use]
pub fn years_until(now: DateTime<Utc>, expiry: NaiveDate) -> f64 {
    let days = (expiry - exchange_date(now)).num_days();
    days as f64 / 365.0
}
